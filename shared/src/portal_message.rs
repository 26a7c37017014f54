//! Promotional message shown on the menu portal, rate-limited per client IP.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};

use crate::storage::{KeyValueStore, PORTAL_MESSAGE_KEY_PREFIX};

/// Minimum time between two messages for the same IP
pub const COOLDOWN_MINUTES: i64 = 30;

/// Message category reported by the server in `tipo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    FunFact,
    EducationalTip,
    Motivational,
    Inspirational,
    ParentingAdvice,
    Welcome,
    Other,
}

impl MessageKind {
    pub fn from_wire(kind: &str) -> Self {
        match kind {
            "dato_curioso" => MessageKind::FunFact,
            "tip_educativo" => MessageKind::EducationalTip,
            "mensaje_motivacional" => MessageKind::Motivational,
            "frase_inspiradora" => MessageKind::Inspirational,
            "consejo_crianza" => MessageKind::ParentingAdvice,
            "fallback" => MessageKind::Welcome,
            _ => MessageKind::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MessageKind::FunFact => "🧠",
            MessageKind::EducationalTip => "💡",
            MessageKind::Motivational => "💪",
            MessageKind::Inspirational => "⭐",
            MessageKind::ParentingAdvice => "🌱",
            MessageKind::Welcome => "🌟",
            MessageKind::Other => "✨",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageKind::FunFact => "Dato Curioso",
            MessageKind::EducationalTip => "Tip Educativo",
            MessageKind::Motivational => "Motivación",
            MessageKind::Inspirational => "Inspiración",
            MessageKind::ParentingAdvice => "Consejo",
            MessageKind::Welcome => "Mensaje de Bienvenida",
            MessageKind::Other => "Mensaje",
        }
    }
}

pub fn storage_key(client_ip: &str) -> String {
    format!("{}{}", PORTAL_MESSAGE_KEY_PREFIX, client_ip)
}

/// Remembers when each IP last saw a message
pub struct MessageCooldown<S> {
    store: S,
}

impl<S: KeyValueStore> MessageCooldown<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether a message may be shown to `client_ip` at `now`.
    ///
    /// A `true` answer records `now` as the latest display.
    pub fn check_and_record(&self, client_ip: &str, now: DateTime<Utc>) -> bool {
        let key = storage_key(client_ip);

        let last_shown = self
            .store
            .get(&key)
            .and_then(|value| DateTime::parse_from_rfc3339(&value).ok())
            .map(|value| value.with_timezone(&Utc));

        if let Some(last_shown) = last_shown {
            let elapsed = now.signed_duration_since(last_shown);
            debug!(
                "IP {}: last message {} minutes ago",
                client_ip,
                elapsed.num_minutes()
            );
            if elapsed < Duration::minutes(COOLDOWN_MINUTES) {
                info!("Portal message suppressed for {}", client_ip);
                return false;
            }
        }

        self.store.set(&key, &now.to_rfc3339());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_first_visit_shows_and_records() {
        let store = MemoryStore::new();
        let cooldown = MessageCooldown::new(store.clone());

        assert!(cooldown.check_and_record("10.0.0.1", start()));
        assert_eq!(
            store.get("ultimo_mensaje_portal_10.0.0.1"),
            Some(start().to_rfc3339())
        );
    }

    #[test]
    fn test_cooldown_window() {
        let store = MemoryStore::new();
        let cooldown = MessageCooldown::new(store.clone());
        cooldown.check_and_record("10.0.0.1", start());

        assert!(!cooldown.check_and_record("10.0.0.1", start() + Duration::minutes(29)));
        assert_eq!(
            store.get("ultimo_mensaje_portal_10.0.0.1"),
            Some(start().to_rfc3339())
        );

        let later = start() + Duration::minutes(31);
        assert!(cooldown.check_and_record("10.0.0.1", later));
        assert_eq!(
            store.get("ultimo_mensaje_portal_10.0.0.1"),
            Some(later.to_rfc3339())
        );
    }

    #[test]
    fn test_exactly_thirty_minutes_shows() {
        let cooldown = MessageCooldown::new(MemoryStore::new());
        cooldown.check_and_record("10.0.0.1", start());

        assert!(cooldown.check_and_record("10.0.0.1", start() + Duration::minutes(30)));
    }

    #[test]
    fn test_cooldown_is_per_ip() {
        let cooldown = MessageCooldown::new(MemoryStore::new());
        cooldown.check_and_record("10.0.0.1", start());

        assert!(cooldown.check_and_record("10.0.0.2", start() + Duration::minutes(1)));
    }

    #[test]
    fn test_unparseable_timestamp_shows() {
        let store = MemoryStore::new();
        store.set(&storage_key("10.0.0.1"), "not a date");

        assert!(MessageCooldown::new(store).check_and_record("10.0.0.1", start()));
    }

    #[test]
    fn test_kind_mapping() {
        let kind = MessageKind::from_wire("tip_educativo");
        assert_eq!(kind.icon(), "💡");
        assert_eq!(kind.label(), "Tip Educativo");

        assert_eq!(MessageKind::from_wire("fallback").label(), "Mensaje de Bienvenida");

        let unknown = MessageKind::from_wire("fallback_local");
        assert_eq!(unknown.icon(), "✨");
        assert_eq!(unknown.label(), "Mensaje");
    }
}
