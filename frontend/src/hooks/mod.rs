pub mod use_contact_form;
pub mod use_contact_info;
pub mod use_contact_popup;
pub mod use_media;
pub mod use_site;

pub use use_contact_form::{use_contact_form, UseContactFormHandle};
pub use use_contact_info::use_contact_info;
pub use use_contact_popup::{use_contact_popup, UseContactPopupHandle};
pub use use_media::use_is_mobile;
pub use use_site::{use_analytics, use_site, use_theme};
