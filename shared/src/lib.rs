//! Shared types and browser-independent logic for the Liceo Lumen site.
//!
//! The wire types in this file mirror the JSON exchanged with the school's
//! configuration/contact API. Field names on the wire are Spanish; the Rust
//! side uses English names with `serde` renames.

use serde::{Deserialize, Serialize};

pub mod analytics;
pub mod contact_flow;
pub mod documents;
pub mod error;
pub mod gallery;
pub mod popup;
pub mod portal_message;
pub mod scheduling;
pub mod storage;
pub mod theme;

pub use error::{ApiError, ScriptError};

/// Public site configuration returned by `GET /configuraciones/publicas`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicConfig {
    #[serde(default)]
    pub google_analytics_id: Option<String>,
    #[serde(default)]
    pub calendly_url: Option<String>,
    #[serde(default)]
    pub honeypot_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicConfigResponse {
    pub success: bool,
    #[serde(default, rename = "configuraciones")]
    pub config: PublicConfig,
}

/// Opening hours shown on the contact and family pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default, rename = "lunesViernes")]
    pub weekdays: String,
    #[serde(default, rename = "extendido")]
    pub extended: String,
    #[serde(default, rename = "sabados")]
    pub saturdays: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, rename = "direccion")]
    pub address: String,
    #[serde(default, rename = "mapsUrl")]
    pub maps_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub facebook: String,
}

/// Contact channels returned by `GET /configuraciones/contacto`.
///
/// `Default` is the blank value rendered when the fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, rename = "correos")]
    pub emails: Vec<String>,
    #[serde(default, rename = "telefono")]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default, rename = "horarios")]
    pub hours: OpeningHours,
    #[serde(default, rename = "ubicacion")]
    pub location: Location,
    #[serde(default, rename = "redesSociales")]
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfoResponse {
    pub success: bool,
    #[serde(default, rename = "contacto")]
    pub contact: ContactInfo,
}

/// One option of an externally supplied select list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default, rename = "descripcion")]
    pub description: Option<String>,
    /// `"si"` when choosing this entry requires a free-text detail
    #[serde(default, rename = "pide_detalle")]
    pub asks_detail: Option<String>,
    #[serde(default, rename = "placeholder_detalle")]
    pub detail_placeholder: Option<String>,
}

impl CatalogEntry {
    pub fn requires_detail(&self) -> bool {
        self.asks_detail
            .as_deref()
            .map(|flag| flag.trim().eq_ignore_ascii_case("si"))
            .unwrap_or(false)
    }
}

/// Option lists used by the contact form selects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalogs {
    #[serde(default, rename = "tipos_consulta")]
    pub inquiry_types: Vec<CatalogEntry>,
    #[serde(default, rename = "tipos_como_conocio")]
    pub referral_sources: Vec<CatalogEntry>,
    #[serde(default, rename = "programas_interes")]
    pub program_interests: Vec<CatalogEntry>,
}

impl Catalogs {
    pub fn referral_source(&self, id: u32) -> Option<&CatalogEntry> {
        self.referral_sources.iter().find(|entry| entry.id == id)
    }

    pub fn program_interest(&self, id: u32) -> Option<&CatalogEntry> {
        self.program_interests.iter().find(|entry| entry.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogsResponse {
    pub success: bool,
    #[serde(default, rename = "catalogos")]
    pub catalogs: Catalogs,
}

/// Lead form posted to `POST /contactos`.
///
/// Ids of `0` mean "nothing selected", matching the empty option of the selects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFormData {
    #[serde(rename = "nombre_padre")]
    pub parent_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(default, rename = "edad_nino", skip_serializing_if = "Option::is_none")]
    pub child_age: Option<u32>,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "id_tipo_consulta")]
    pub inquiry_type_id: u32,
    #[serde(rename = "id_como_conocio")]
    pub referral_source_id: u32,
    #[serde(default, rename = "como_conocio_detalle", skip_serializing_if = "Option::is_none")]
    pub referral_detail: Option<String>,
    #[serde(default, rename = "id_programa_interes", skip_serializing_if = "Option::is_none")]
    pub program_interest_id: Option<u32>,
    /// Hidden anti-spam field, always empty for humans
    #[serde(default)]
    pub honeypot: String,
}

/// Response to a contact submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmissionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "contacto_id")]
    pub contact_id: Option<u64>,
    #[serde(default, rename = "calendly_url")]
    pub scheduling_url: Option<String>,
    #[serde(default, rename = "errores")]
    pub errors: Option<Vec<String>>,
}

impl ContactSubmissionResult {
    /// Classifies the response to `POST /contactos`.
    ///
    /// An error status whose body carries a message or an error list is a
    /// rejection the server explains, returned as `Ok` with `success == false`.
    /// Any other error status is `ApiError::Status`.
    pub fn from_response(ok: bool, status: u16, body: &str) -> Result<Self, ApiError> {
        if ok {
            return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
        }

        match serde_json::from_str::<Self>(body) {
            Ok(result) if result.errors.is_some() || !result.message.trim().is_empty() => Ok(Self {
                success: false,
                ..result
            }),
            _ => Err(ApiError::Status {
                status,
                body: body.to_string(),
            }),
        }
    }
}

/// Informational banner returned by `GET /portal/mensaje-visitante`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalMessage {
    pub success: bool,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "ip_cliente")]
    pub client_ip: String,
    #[serde(default, rename = "razon")]
    pub reason: Option<String>,
}

impl PortalMessage {
    /// Local message used when the API cannot be reached
    pub fn offline_fallback() -> Self {
        Self {
            success: true,
            message: "¡Bienvenido a Lumen! 🌟 Descubre nuestros programas educativos.".to_string(),
            kind: "fallback_local".to_string(),
            client_ip: "0.0.0.0".to_string(),
            reason: Some("error_red".to_string()),
        }
    }
}

/// Image entry of `assets/data/galeria.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub url: String,
    pub alt: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryManifest {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

/// Downloadable file listed on the family resources page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(default, rename = "descripcion")]
    pub description: String,
    #[serde(rename = "archivo")]
    pub file: String,
    #[serde(default, rename = "icono")]
    pub icon: String,
    #[serde(rename = "carpeta")]
    pub folder: String,
}

impl Document {
    /// Path of the file relative to the site's assets directory
    pub fn asset_path(&self) -> String {
        format!("documents/{}/{}", self.folder, self.file)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCategory {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(default, rename = "icono")]
    pub icon: String,
    #[serde(default, rename = "descripcion")]
    pub description: String,
    #[serde(default, rename = "orden")]
    pub order: i32,
    #[serde(default, rename = "documentos")]
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentManifest {
    #[serde(default, rename = "categorias")]
    pub categories: Vec<DocumentCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_requires_detail() {
        let mut entry = CatalogEntry {
            id: 4,
            name: "Otro".to_string(),
            description: None,
            asks_detail: Some("si".to_string()),
            detail_placeholder: Some("¿Dónde?".to_string()),
        };
        assert!(entry.requires_detail());

        entry.asks_detail = Some("no".to_string());
        assert!(!entry.requires_detail());

        entry.asks_detail = None;
        assert!(!entry.requires_detail());
    }

    #[test]
    fn test_form_data_uses_api_field_names() {
        let form = ContactFormData {
            parent_name: "Ana Gomez".to_string(),
            email: "ana@x.com".to_string(),
            phone: "3001234567".to_string(),
            message: "Quiero informacion del programa".to_string(),
            inquiry_type_id: 1,
            referral_source_id: 2,
            ..ContactFormData::default()
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["nombre_padre"], "Ana Gomez");
        assert_eq!(json["telefono"], "3001234567");
        assert_eq!(json["id_tipo_consulta"], 1);
        assert_eq!(json["id_como_conocio"], 2);
        assert!(json.get("edad_nino").is_none());
        assert!(json.get("como_conocio_detalle").is_none());
    }

    #[test]
    fn test_catalogs_response_tolerates_missing_lists() {
        let body = r#"{"success":true,"catalogos":{"tipos_consulta":[{"id":1,"nombre":"Información"}]}}"#;
        let response: CatalogsResponse = serde_json::from_str(body).unwrap();

        assert!(response.success);
        assert_eq!(response.catalogs.inquiry_types.len(), 1);
        assert!(response.catalogs.referral_sources.is_empty());
        assert!(response.catalogs.program_interests.is_empty());
    }

    #[test]
    fn test_submission_result_decodes_server_errors() {
        let body = r#"{"success":false,"message":"Datos inválidos","errores":["Email inválido"]}"#;
        let result: ContactSubmissionResult = serde_json::from_str(body).unwrap();

        assert!(!result.success);
        assert_eq!(result.errors, Some(vec!["Email inválido".to_string()]));
        assert_eq!(result.scheduling_url, None);
    }

    #[test]
    fn test_rejection_without_success_flag_keeps_server_errors() {
        let body = r#"{"message":"Datos inválidos","errores":["El email ya está registrado"]}"#;
        let result = ContactSubmissionResult::from_response(false, 422, body).unwrap();

        assert!(!result.success);
        assert_eq!(result.message, "Datos inválidos");
        assert_eq!(result.errors, Some(vec!["El email ya está registrado".to_string()]));
    }

    #[test]
    fn test_error_status_with_unreadable_body_is_transport_failure() {
        let outcome = ContactSubmissionResult::from_response(false, 502, "<html>Bad Gateway</html>");
        assert_eq!(
            outcome,
            Err(ApiError::Status {
                status: 502,
                body: "<html>Bad Gateway</html>".to_string()
            })
        );

        let outcome = ContactSubmissionResult::from_response(false, 500, r#"{"detail":"boom"}"#);
        assert!(matches!(outcome, Err(ApiError::Status { status: 500, .. })));
    }

    #[test]
    fn test_ok_status_passes_success_flag_through() {
        let body = r#"{"success":false,"message":"Ya existe una solicitud","errores":["Duplicado"]}"#;
        let result = ContactSubmissionResult::from_response(true, 200, body).unwrap();
        assert!(!result.success);
        assert_eq!(result.errors, Some(vec!["Duplicado".to_string()]));

        let body = r#"{"success":true,"message":"Creado","contacto_id":7}"#;
        let result = ContactSubmissionResult::from_response(true, 201, body).unwrap();
        assert!(result.success);
        assert_eq!(result.contact_id, Some(7));

        let outcome = ContactSubmissionResult::from_response(true, 200, "not json");
        assert!(matches!(outcome, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_contact_info_decodes_nested_sections() {
        let body = r#"{
            "success": true,
            "contacto": {
                "correos": ["info@liceolumen.com"],
                "telefono": "6011234567",
                "horarios": {"lunesViernes": "6:30 AM - 5:30 PM"},
                "ubicacion": {"direccion": "Calle 1", "mapsUrl": "https://maps.example"}
            }
        }"#;
        let response: ContactInfoResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.contact.emails, vec!["info@liceolumen.com".to_string()]);
        assert_eq!(response.contact.hours.weekdays, "6:30 AM - 5:30 PM");
        assert_eq!(response.contact.hours.saturdays, "");
        assert_eq!(response.contact.location.maps_url, "https://maps.example");
        assert_eq!(response.contact.social, SocialLinks::default());
    }

    #[test]
    fn test_document_asset_path() {
        let document = Document {
            id: 1,
            title: "Manual de convivencia".to_string(),
            description: String::new(),
            file: "manual.pdf".to_string(),
            icon: "📘".to_string(),
            folder: "institucional".to_string(),
        };
        assert_eq!(document.asset_path(), "documents/institucional/manual.pdf");
    }
}
