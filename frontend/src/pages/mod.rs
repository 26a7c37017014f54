pub mod about;
pub mod admission;
pub mod contact;
pub mod family;
pub mod gallery;
pub mod menu;
pub mod programs;

pub use about::About;
pub use admission::Admission;
pub use contact::Contact;
pub use family::Family;
pub use gallery::Gallery;
pub use menu::Menu;
pub use programs::Programs;
