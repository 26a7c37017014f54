pub mod contact_channels;
pub mod contact_form;
pub mod contact_modal;
pub mod floating_particles;
pub mod header;
pub mod portal_message;

pub use contact_channels::ContactChannels;
pub use contact_form::ContactFormView;
pub use contact_modal::ContactModal;
pub use floating_particles::FloatingParticles;
pub use header::PageHeader;
pub use portal_message::PortalMessageBanner;
