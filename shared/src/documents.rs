//! Family resources: the document library and the monthly school calendars.

use crate::{DocumentCategory, DocumentManifest};

/// Months that have a published calendar, January through October
pub const CALENDAR_MONTHS: [&str; 10] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub name: &'static str,
    /// Zero-based month index
    pub index: u32,
    /// Image path relative to the assets root
    pub image: String,
    pub available: bool,
}

/// Calendars up to `current_month0` (zero-based) are available
pub fn school_calendars(current_month0: u32) -> Vec<CalendarMonth> {
    CALENDAR_MONTHS
        .into_iter()
        .zip(0u32..)
        .map(|(name, index)| CalendarMonth {
            name,
            index,
            image: format!("images/calendarios/{}.png", name.to_lowercase()),
            available: index <= current_month0,
        })
        .collect()
}

/// Calendar shown first: the current month, or October after the school year ends
pub fn default_calendar(calendars: &[CalendarMonth], current_month0: u32) -> Option<&CalendarMonth> {
    let last = calendars.len().checked_sub(1)?;
    calendars.get((current_month0 as usize).min(last))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentLibrary {
    categories: Vec<DocumentCategory>,
}

impl DocumentLibrary {
    pub fn new(manifest: DocumentManifest) -> Self {
        let mut categories = manifest.categories;
        categories.sort_by_key(|category| category.order);
        Self { categories }
    }

    pub fn categories(&self) -> &[DocumentCategory] {
        &self.categories
    }

    /// Categories with their documents narrowed to those whose title or
    /// description contains `query`. Categories left empty are dropped.
    pub fn search(&self, query: &str) -> Vec<DocumentCategory> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.categories.clone();
        }

        self.categories
            .iter()
            .filter_map(|category| {
                let documents: Vec<_> = category
                    .documents
                    .iter()
                    .filter(|document| {
                        document.title.to_lowercase().contains(&query)
                            || document.description.to_lowercase().contains(&query)
                    })
                    .cloned()
                    .collect();

                if documents.is_empty() {
                    None
                } else {
                    Some(DocumentCategory {
                        documents,
                        ..category.clone()
                    })
                }
            })
            .collect()
    }
}

pub fn document_count(categories: &[DocumentCategory]) -> usize {
    categories.iter().map(|category| category.documents.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    fn document(id: u32, title: &str, description: &str) -> Document {
        Document {
            id,
            title: title.to_string(),
            description: description.to_string(),
            file: format!("doc-{}.pdf", id),
            icon: "📄".to_string(),
            folder: "general".to_string(),
        }
    }

    fn category(id: &str, order: i32, documents: Vec<Document>) -> DocumentCategory {
        DocumentCategory {
            id: id.to_string(),
            title: id.to_string(),
            icon: String::new(),
            description: String::new(),
            order,
            documents,
        }
    }

    fn library() -> DocumentLibrary {
        DocumentLibrary::new(DocumentManifest {
            categories: vec![
                category(
                    "reglamentos",
                    2,
                    vec![document(3, "Reglamento Interno", "Normas de convivencia")],
                ),
                category(
                    "admision",
                    1,
                    vec![
                        document(1, "Lista de Útiles", "Materiales para el año"),
                        document(2, "Uniformes", "Guía de uniformes escolares"),
                    ],
                ),
            ],
        })
    }

    #[test]
    fn test_categories_sorted_by_order() {
        let ids: Vec<_> = library().categories().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["admision", "reglamentos"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_drops_empty_categories() {
        let results = library().search("  UNIFORMES ");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "admision");
        assert_eq!(results[0].documents.len(), 1);
        assert_eq!(results[0].documents[0].id, 2);
    }

    #[test]
    fn test_search_matches_description() {
        let results = library().search("convivencia");
        assert_eq!(document_count(&results), 1);
        assert_eq!(results[0].id, "reglamentos");
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let results = library().search("");
        assert_eq!(results.len(), 2);
        assert_eq!(document_count(&results), 3);
    }

    #[test]
    fn test_calendars_available_up_to_current_month() {
        let calendars = school_calendars(2);

        assert_eq!(calendars.len(), 10);
        assert_eq!(calendars[0].image, "images/calendarios/enero.png");
        assert!(calendars[2].available);
        assert!(!calendars[3].available);
        assert_eq!(default_calendar(&calendars, 2).map(|c| c.name), Some("Marzo"));
    }

    #[test]
    fn test_default_calendar_after_october() {
        let calendars = school_calendars(11);

        assert!(calendars.iter().all(|c| c.available));
        assert_eq!(default_calendar(&calendars, 11).map(|c| c.name), Some("Octubre"));
    }
}
