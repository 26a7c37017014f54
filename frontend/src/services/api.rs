use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiError, Catalogs, CatalogsResponse, ContactFormData, ContactInfo, ContactInfoResponse,
    ContactSubmissionResult, DocumentManifest, GalleryImage, GalleryManifest,
    PortalMessage, PublicConfig, PublicConfigResponse,
};

use crate::config::AppConfig;
use crate::services::logging::Logger;

const COMPONENT: &str = "api";

/// Client for the school's configuration/contact API and the static data files
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    assets_base: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            assets_base: config.assets_base.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Public site settings. Falls back to an empty config.
    pub async fn public_config(&self) -> PublicConfig {
        match get_json::<PublicConfigResponse>(&self.endpoint("/configuraciones/publicas")).await {
            Ok(response) if response.success => response.config,
            Ok(_) => {
                Logger::warn_with_component(COMPONENT, "Public config request was not successful");
                PublicConfig::default()
            }
            Err(e) => {
                Logger::warn_with_component(COMPONENT, &format!("Failed to load public config: {}", e));
                PublicConfig::default()
            }
        }
    }

    /// Contact channels. Falls back to blank info.
    pub async fn contact_info(&self) -> ContactInfo {
        match get_json::<ContactInfoResponse>(&self.endpoint("/configuraciones/contacto")).await {
            Ok(response) if response.success => response.contact,
            Ok(_) => {
                Logger::warn_with_component(COMPONENT, "Contact info request was not successful");
                ContactInfo::default()
            }
            Err(e) => {
                Logger::warn_with_component(COMPONENT, &format!("Failed to load contact info: {}", e));
                ContactInfo::default()
            }
        }
    }

    /// Option lists for the contact form. Falls back to empty lists.
    pub async fn catalogs(&self) -> Catalogs {
        match get_json::<CatalogsResponse>(&self.endpoint("/contactos/catalogos")).await {
            Ok(response) if response.success => response.catalogs,
            Ok(_) => {
                Logger::warn_with_component(COMPONENT, "Catalogs request was not successful");
                Catalogs::default()
            }
            Err(e) => {
                Logger::warn_with_component(COMPONENT, &format!("Failed to load catalogs: {}", e));
                Catalogs::default()
            }
        }
    }

    /// Promotional message for this visitor, or the local welcome message when offline
    pub async fn portal_message(&self) -> PortalMessage {
        match get_json::<PortalMessage>(&self.endpoint("/portal/mensaje-visitante")).await {
            Ok(message) => message,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("Failed to load portal message: {}", e));
                PortalMessage::offline_fallback()
            }
        }
    }

    pub async fn gallery_images(&self) -> Vec<GalleryImage> {
        let url = format!("{}/data/galeria.json", self.assets_base);
        match get_json::<GalleryManifest>(&url).await {
            Ok(manifest) => manifest.images,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("Error loading gallery images: {}", e));
                Vec::new()
            }
        }
    }

    pub async fn document_categories(&self) -> DocumentManifest {
        let url = format!("{}/data/documentos.json", self.assets_base);
        match get_json::<DocumentManifest>(&url).await {
            Ok(manifest) => manifest,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("Error loading documents: {}", e));
                DocumentManifest::default()
            }
        }
    }

    /// Posts a lead.
    ///
    /// A rejected submission the server explains in its body comes back as
    /// `Ok` with `success == false`; everything else that goes wrong is `Err`.
    pub async fn submit_contact(
        &self,
        data: &ContactFormData,
    ) -> Result<ContactSubmissionResult, ApiError> {
        let request = Request::post(&self.endpoint("/contactos"))
            .json(data)
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ContactSubmissionResult::from_response(ok, status, &body)
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
