//! Contact form state machine.
//!
//! Drives the lead-capture flow shared by the contact page and the pop-up:
//! client-side validation, the in-flight submission, and the hand-off to the
//! scheduling widget. The machine does no I/O; the caller performs the
//! submission between [`ContactFlow::begin_submit`] and
//! [`ContactFlow::complete_submit`].
//!
//! ```text
//! Form ──begin_submit──▶ Submitting ──complete_submit──▶ Scheduling ──back_to_form──▶ Form
//!   ▲        │invalid                    │ rejected / network
//!   │        ▼                           ▼
//!   └── FormWithErrors ◀─────────────────┘
//! ```

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::scheduling::{SchedulingPrefill, SchedulingRequest};
use crate::{ApiError, Catalogs, ContactFormData, ContactSubmissionResult};

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_PHONE_CHARS: usize = 7;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Shown when the submission never reached the server
pub const GENERIC_RETRY_MESSAGE: &str =
    "Error al enviar el formulario. Por favor intenta nuevamente.";

pub const DEFAULT_DETAIL_PLACEHOLDER: &str = "Por favor especifica";

const DEFAULT_CONFIRMATION: &str = "¡Gracias! Nos pondremos en contacto contigo muy pronto.";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A failed client-side rule. `Display` is the message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("El nombre debe tener al menos 3 caracteres")]
    NameTooShort,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Teléfono inválido")]
    InvalidPhone,
    #[error("El mensaje debe tener al menos 10 caracteres")]
    MessageTooShort,
    #[error("Debes seleccionar un tipo de consulta")]
    MissingInquiryType,
    #[error("Debes indicar cómo nos conociste")]
    MissingReferralSource,
    #[error("Por favor completa el campo de detalle")]
    MissingReferralDetail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Checks every rule and returns all failures, in form order
pub fn validate(form: &ContactFormData, catalogs: &Catalogs) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if char_len(&form.parent_name) < MIN_NAME_CHARS {
        errors.push(FieldError::NameTooShort);
    }
    if !is_valid_email(&form.email) {
        errors.push(FieldError::InvalidEmail);
    }
    if char_len(&form.phone) < MIN_PHONE_CHARS {
        errors.push(FieldError::InvalidPhone);
    }
    if char_len(&form.message) < MIN_MESSAGE_CHARS {
        errors.push(FieldError::MessageTooShort);
    }
    if form.inquiry_type_id == 0 {
        errors.push(FieldError::MissingInquiryType);
    }
    if form.referral_source_id == 0 {
        errors.push(FieldError::MissingReferralSource);
    }

    let detail_required = catalogs
        .referral_source(form.referral_source_id)
        .map(|source| source.requires_detail())
        .unwrap_or(false);
    let detail_missing = form
        .referral_detail
        .as_deref()
        .map(|detail| detail.trim().is_empty())
        .unwrap_or(true);
    if detail_required && detail_missing {
        errors.push(FieldError::MissingReferralDetail);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FlowState {
    #[default]
    Form,
    FormWithErrors(Vec<String>),
    Submitting,
    Scheduling {
        url: String,
    },
    /// Submission accepted but there is no scheduling page to show
    Confirmation {
        message: String,
    },
}

/// A single user edit to the form
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    ParentName(String),
    Email(String),
    Phone(String),
    ChildAge(Option<u32>),
    Message(String),
    InquiryType(u32),
    ReferralSource(u32),
    ReferralDetail(String),
    ProgramInterest(Option<u32>),
    Honeypot(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Client-side validation failed; nothing was sent
    Invalid(Vec<FieldError>),
    /// A submission is already in flight
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFlow {
    form: ContactFormData,
    catalogs: Catalogs,
    state: FlowState,
    fallback_scheduling_url: Option<String>,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactFormData {
        &self.form
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FlowState::Submitting
    }

    /// Messages to show above the form, empty unless in `FormWithErrors`
    pub fn errors(&self) -> &[String] {
        match &self.state {
            FlowState::FormWithErrors(errors) => errors,
            _ => &[],
        }
    }

    pub fn set_catalogs(&mut self, catalogs: Catalogs) {
        debug!(
            "Contact catalogs loaded: {} inquiry types, {} referral sources, {} programs",
            catalogs.inquiry_types.len(),
            catalogs.referral_sources.len(),
            catalogs.program_interests.len()
        );
        self.catalogs = catalogs;
    }

    /// Scheduling page used when a successful response carries no URL of its own
    pub fn set_fallback_scheduling_url(&mut self, url: Option<String>) {
        self.fallback_scheduling_url = url.filter(|url| !url.trim().is_empty());
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::ParentName(value) => self.form.parent_name = value,
            FieldEdit::Email(value) => self.form.email = value,
            FieldEdit::Phone(value) => self.form.phone = value,
            FieldEdit::ChildAge(value) => self.form.child_age = value,
            FieldEdit::Message(value) => self.form.message = value,
            FieldEdit::InquiryType(id) => self.form.inquiry_type_id = id,
            FieldEdit::ReferralSource(id) => {
                self.form.referral_source_id = id;
                if self.referral_detail_placeholder().is_none() {
                    self.form.referral_detail = None;
                }
            }
            FieldEdit::ReferralDetail(value) => {
                self.form.referral_detail = if value.is_empty() { None } else { Some(value) };
            }
            FieldEdit::ProgramInterest(id) => self.form.program_interest_id = id.filter(|id| *id != 0),
            FieldEdit::Honeypot(value) => self.form.honeypot = value,
        }
    }

    /// Placeholder for the referral detail input, `None` when the selected
    /// source does not ask for one
    pub fn referral_detail_placeholder(&self) -> Option<String> {
        self.catalogs
            .referral_source(self.form.referral_source_id)
            .filter(|source| source.requires_detail())
            .map(|source| {
                source
                    .detail_placeholder
                    .clone()
                    .filter(|placeholder| !placeholder.is_empty())
                    .unwrap_or_else(|| DEFAULT_DETAIL_PLACEHOLDER.to_string())
            })
    }

    /// Validates and, if valid, moves to `Submitting` and returns the payload to post
    pub fn begin_submit(&mut self) -> Result<ContactFormData, SubmitRejected> {
        if self.is_loading() {
            warn!("Contact submission ignored: one is already in flight");
            return Err(SubmitRejected::InFlight);
        }

        if let Err(errors) = validate(&self.form, &self.catalogs) {
            debug!("Contact form rejected with {} validation errors", errors.len());
            self.state =
                FlowState::FormWithErrors(errors.iter().map(ToString::to_string).collect());
            return Err(SubmitRejected::Invalid(errors));
        }

        self.state = FlowState::Submitting;
        Ok(self.form.clone())
    }

    /// Applies the outcome of the submission started by `begin_submit`
    pub fn complete_submit(&mut self, outcome: Result<ContactSubmissionResult, ApiError>) {
        if !self.is_loading() {
            warn!("Contact submission outcome arrived outside of Submitting; ignoring");
            return;
        }

        self.state = match outcome {
            Ok(result) if result.success => {
                let url = result
                    .scheduling_url
                    .filter(|url| !url.trim().is_empty())
                    .or_else(|| self.fallback_scheduling_url.clone());

                match url {
                    Some(url) => {
                        info!("Contact created (id {:?}), opening scheduling", result.contact_id);
                        FlowState::Scheduling { url }
                    }
                    None => {
                        warn!("Contact created without a scheduling URL");
                        let message = if result.message.is_empty() {
                            DEFAULT_CONFIRMATION.to_string()
                        } else {
                            result.message
                        };
                        FlowState::Confirmation { message }
                    }
                }
            }
            Ok(result) => {
                let errors = match result.errors {
                    Some(errors) if !errors.is_empty() => errors,
                    _ if !result.message.is_empty() => vec![result.message],
                    _ => vec![GENERIC_RETRY_MESSAGE.to_string()],
                };
                info!("Contact rejected by server: {:?}", errors);
                FlowState::FormWithErrors(errors)
            }
            Err(err) => {
                warn!("Contact submission failed: {}", err);
                FlowState::FormWithErrors(vec![GENERIC_RETRY_MESSAGE.to_string()])
            }
        };
    }

    /// Leaves the scheduling view, keeping what was typed
    pub fn back_to_form(&mut self) {
        if matches!(self.state, FlowState::Scheduling { .. }) {
            self.state = FlowState::Form;
        }
    }

    /// Shows the form again from any finished state, keeping what was typed
    pub fn show_form(&mut self) {
        if !self.is_loading() {
            self.state = FlowState::Form;
        }
    }

    /// Clears the form and returns to the initial state
    pub fn reset(&mut self) {
        self.form = ContactFormData::default();
        self.state = FlowState::Form;
    }

    /// Widget request for the current scheduling state
    pub fn scheduling_request(&self, container_id: &str) -> Option<SchedulingRequest> {
        let FlowState::Scheduling { url } = &self.state else {
            return None;
        };

        Some(SchedulingRequest {
            url: url.clone(),
            container_id: container_id.to_string(),
            prefill: SchedulingPrefill {
                name: self.form.parent_name.trim().to_string(),
                email: self.form.email.trim().to_string(),
                note: self.scheduling_note(),
            },
        })
    }

    /// Free-text note handed to the scheduling widget: the visitor's message first,
    /// then the details the team needs before the call
    pub fn scheduling_note(&self) -> String {
        let mut note = self.form.message.clone();

        note.push_str("\n\n--- Información adicional ---");
        note.push_str(&format!("\nTeléfono: {}", self.form.phone));

        if let Some(age) = self.form.child_age {
            note.push_str(&format!("\nEdad del niño: {} años", age));
        }

        if let Some(program) = self
            .form
            .program_interest_id
            .and_then(|id| self.catalogs.program_interest(id))
        {
            note.push_str(&format!("\nPrograma de interés: {}", program.name));
        }

        note
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogEntry;

    fn entry(id: u32, name: &str, asks_detail: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            description: None,
            asks_detail: asks_detail.map(str::to_string),
            detail_placeholder: asks_detail.map(|_| "¿Quién te recomendó?".to_string()),
        }
    }

    fn catalogs() -> Catalogs {
        Catalogs {
            inquiry_types: vec![entry(1, "Información general", None)],
            referral_sources: vec![
                entry(2, "Instagram", Some("no")),
                entry(3, "Recomendación", Some("si")),
            ],
            program_interests: vec![entry(7, "Lumen Kids", None)],
        }
    }

    fn valid_form() -> ContactFormData {
        ContactFormData {
            parent_name: "Ana Gomez".to_string(),
            email: "ana@x.com".to_string(),
            phone: "3001234567".to_string(),
            message: "Quiero informacion del programa".to_string(),
            inquiry_type_id: 1,
            referral_source_id: 2,
            ..ContactFormData::default()
        }
    }

    fn flow_with(form: ContactFormData) -> ContactFlow {
        let mut flow = ContactFlow::new();
        flow.set_catalogs(catalogs());
        flow.form = form;
        flow
    }

    fn success(url: Option<&str>) -> ContactSubmissionResult {
        ContactSubmissionResult {
            success: true,
            message: "Contacto creado".to_string(),
            contact_id: Some(41),
            scheduling_url: url.map(str::to_string),
            errors: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&valid_form(), &catalogs()), Ok(()));
    }

    fn assert_single_failure(mutate: impl Fn(&mut ContactFormData), expected: FieldError) {
        let mut form = valid_form();
        mutate(&mut form);
        assert_eq!(validate(&form, &catalogs()), Err(vec![expected]));
    }

    #[test]
    fn test_each_rule_fails_independently() {
        assert_single_failure(|f| f.parent_name = "Al".to_string(), FieldError::NameTooShort);
        assert_single_failure(|f| f.parent_name = "   Al   ".to_string(), FieldError::NameTooShort);
        assert_single_failure(|f| f.email = "ana.x.com".to_string(), FieldError::InvalidEmail);
        assert_single_failure(|f| f.email = "ana@xcom".to_string(), FieldError::InvalidEmail);
        assert_single_failure(|f| f.email = "ana maria@x.com".to_string(), FieldError::InvalidEmail);
        assert_single_failure(|f| f.phone = "300123".to_string(), FieldError::InvalidPhone);
        assert_single_failure(|f| f.message = "Hola".to_string(), FieldError::MessageTooShort);
        assert_single_failure(|f| f.inquiry_type_id = 0, FieldError::MissingInquiryType);
        assert_single_failure(|f| f.referral_source_id = 0, FieldError::MissingReferralSource);
    }

    #[test]
    fn test_empty_form_reports_every_rule() {
        let errors = validate(&ContactFormData::default(), &catalogs()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[0].to_string(), "El nombre debe tener al menos 3 caracteres");
    }

    #[test]
    fn test_referral_detail_required_when_source_asks() {
        let mut form = valid_form();
        form.referral_source_id = 3;
        assert_eq!(
            validate(&form, &catalogs()),
            Err(vec![FieldError::MissingReferralDetail])
        );

        form.referral_detail = Some("  ".to_string());
        assert_eq!(
            validate(&form, &catalogs()),
            Err(vec![FieldError::MissingReferralDetail])
        );

        form.referral_detail = Some("La familia Pérez".to_string());
        assert_eq!(validate(&form, &catalogs()), Ok(()));
    }

    #[test]
    fn test_switching_to_source_without_detail_clears_it() {
        let mut flow = flow_with(valid_form());

        flow.edit(FieldEdit::ReferralSource(3));
        assert_eq!(
            flow.referral_detail_placeholder(),
            Some("¿Quién te recomendó?".to_string())
        );
        flow.edit(FieldEdit::ReferralDetail("La familia Pérez".to_string()));
        assert!(flow.form().referral_detail.is_some());

        flow.edit(FieldEdit::ReferralSource(2));
        assert_eq!(flow.referral_detail_placeholder(), None);
        assert_eq!(flow.form().referral_detail, None);
    }

    #[test]
    fn test_invalid_submit_makes_no_request() {
        let mut flow = flow_with(ContactFormData::default());

        let rejected = flow.begin_submit();
        assert!(matches!(rejected, Err(SubmitRejected::Invalid(ref errors)) if errors.len() == 6));
        assert!(!flow.is_loading());
        assert_eq!(flow.errors().len(), 6);
    }

    #[test]
    fn test_end_to_end_submission_reaches_scheduling() {
        let mut flow = flow_with(ContactFormData::default());
        let form = valid_form();
        flow.edit(FieldEdit::ParentName(form.parent_name.clone()));
        flow.edit(FieldEdit::Email(form.email.clone()));
        flow.edit(FieldEdit::Phone(form.phone.clone()));
        flow.edit(FieldEdit::Message(form.message.clone()));
        flow.edit(FieldEdit::InquiryType(1));
        flow.edit(FieldEdit::ReferralSource(2));

        let payload = flow.begin_submit().unwrap();
        assert_eq!(payload, form);
        assert!(flow.is_loading());

        flow.complete_submit(Ok(success(Some("https://calendly.com/x"))));
        assert!(!flow.is_loading());
        assert_eq!(
            flow.state(),
            &FlowState::Scheduling { url: "https://calendly.com/x".to_string() }
        );
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut flow = flow_with(valid_form());
        flow.begin_submit().unwrap();

        assert_eq!(flow.begin_submit(), Err(SubmitRejected::InFlight));
        assert!(flow.is_loading());
    }

    #[test]
    fn test_server_errors_are_surfaced_verbatim() {
        let mut flow = flow_with(valid_form());
        flow.begin_submit().unwrap();

        flow.complete_submit(Ok(ContactSubmissionResult {
            success: false,
            message: "Datos inválidos".to_string(),
            errors: Some(vec!["El email ya está registrado".to_string()]),
            ..ContactSubmissionResult::default()
        }));

        assert_eq!(flow.errors(), ["El email ya está registrado".to_string()]);
    }

    #[test]
    fn test_server_failure_without_list_uses_message() {
        let mut flow = flow_with(valid_form());
        flow.begin_submit().unwrap();

        flow.complete_submit(Ok(ContactSubmissionResult {
            success: false,
            message: "Demasiadas solicitudes".to_string(),
            errors: Some(Vec::new()),
            ..ContactSubmissionResult::default()
        }));

        assert_eq!(flow.errors(), ["Demasiadas solicitudes".to_string()]);
    }

    #[test]
    fn test_rejected_status_body_reaches_the_form() {
        let mut flow = flow_with(valid_form());
        flow.begin_submit().unwrap();

        let body = r#"{"message":"Datos inválidos","errores":["El email ya está registrado"]}"#;
        flow.complete_submit(ContactSubmissionResult::from_response(false, 400, body));

        assert_eq!(flow.errors(), ["El email ya está registrado".to_string()]);
    }

    #[test]
    fn test_transport_failure_shows_generic_retry() {
        let mut flow = flow_with(valid_form());
        flow.begin_submit().unwrap();

        flow.complete_submit(Err(ApiError::Network("connection refused".to_string())));

        assert_eq!(flow.errors(), [GENERIC_RETRY_MESSAGE.to_string()]);
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_success_without_url_uses_configured_fallback() {
        let mut flow = flow_with(valid_form());
        flow.set_fallback_scheduling_url(Some("https://calendly.com/lumen".to_string()));
        flow.begin_submit().unwrap();

        flow.complete_submit(Ok(success(None)));

        assert_eq!(
            flow.state(),
            &FlowState::Scheduling { url: "https://calendly.com/lumen".to_string() }
        );
    }

    #[test]
    fn test_success_without_any_url_confirms() {
        let mut flow = flow_with(valid_form());
        flow.set_fallback_scheduling_url(Some("   ".to_string()));
        flow.begin_submit().unwrap();

        flow.complete_submit(Ok(success(Some(""))));

        assert_eq!(
            flow.state(),
            &FlowState::Confirmation { message: "Contacto creado".to_string() }
        );
    }

    #[test]
    fn test_late_outcome_is_ignored() {
        let mut flow = flow_with(valid_form());
        flow.complete_submit(Ok(success(Some("https://calendly.com/x"))));
        assert_eq!(flow.state(), &FlowState::Form);
    }

    #[test]
    fn test_back_to_form_keeps_input_and_reset_clears_it() {
        let mut flow = flow_with(valid_form());
        flow.begin_submit().unwrap();
        flow.complete_submit(Ok(success(Some("https://calendly.com/x"))));

        flow.back_to_form();
        assert_eq!(flow.state(), &FlowState::Form);
        assert_eq!(flow.form(), &valid_form());

        flow.reset();
        assert_eq!(flow.form(), &ContactFormData::default());
        assert_eq!(flow.catalogs(), &catalogs());
    }

    #[test]
    fn test_show_form_clears_errors_but_not_in_flight() {
        let mut flow = flow_with(ContactFormData::default());
        let _ = flow.begin_submit();
        assert!(!flow.errors().is_empty());

        flow.show_form();
        assert_eq!(flow.state(), &FlowState::Form);

        let mut flow = flow_with(valid_form());
        flow.begin_submit().unwrap();
        flow.show_form();
        assert!(flow.is_loading());
    }

    #[test]
    fn test_scheduling_request_composes_note() {
        let mut form = valid_form();
        form.child_age = Some(4);
        form.program_interest_id = Some(7);
        let mut flow = flow_with(form);
        assert_eq!(flow.scheduling_request("calendly-container"), None);

        flow.begin_submit().unwrap();
        flow.complete_submit(Ok(success(Some("https://calendly.com/x"))));

        let request = flow.scheduling_request("calendly-container").unwrap();
        assert_eq!(request.url, "https://calendly.com/x");
        assert_eq!(request.container_id, "calendly-container");
        assert_eq!(request.prefill.name, "Ana Gomez");
        assert_eq!(request.prefill.email, "ana@x.com");
        assert_eq!(
            request.prefill.note,
            "Quiero informacion del programa\n\n--- Información adicional ---\
             \nTeléfono: 3001234567\nEdad del niño: 4 años\nPrograma de interés: Lumen Kids"
        );
    }

    #[test]
    fn test_note_skips_unknown_program() {
        let mut form = valid_form();
        form.program_interest_id = Some(99);
        let flow = flow_with(form);

        assert!(!flow.scheduling_note().contains("Programa de interés"));
        assert!(!flow.scheduling_note().contains("Edad del niño"));
    }

    #[test]
    fn test_program_interest_zero_means_none() {
        let mut flow = flow_with(valid_form());
        flow.edit(FieldEdit::ProgramInterest(Some(0)));
        assert_eq!(flow.form().program_interest_id, None);
    }
}
