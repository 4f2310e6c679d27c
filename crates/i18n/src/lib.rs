//! Internationalization store for the SaaS Pulse dashboard.
//!
//! Holds the active display language and exposes the translated UI label
//! set. The dictionary is static and bilingual; the selector is shared
//! mutable state so every reader observes a language change immediately.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Supported display languages. Spanish is the launch default.
///
/// Keeping this a closed enum means an invalid language is unrepresentable:
/// `set_language` is total over its input domain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// The other supported language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// The label set for this language.
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }
}

/// The full set of UI labels the dashboard renders.
///
/// Adding or removing a field here must be mirrored in both `ES` and `EN`;
/// the struct makes a missing entry a compile error rather than a runtime
/// lookup miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub live: &'static str,
    pub paused: &'static str,
    pub refresh: &'static str,
    pub monthly_revenue: &'static str,
    pub active_users: &'static str,
    pub churn_rate: &'static str,
    pub new_customers: &'static str,
    pub revenue_trend: &'static str,
    pub recent_transactions: &'static str,
    pub customer: &'static str,
    pub plan: &'static str,
    pub amount: &'static str,
    pub status: &'static str,
    pub date: &'static str,
    pub completed: &'static str,
    pub pending: &'static str,
    pub footer: &'static str,
    pub currency: &'static str,
}

pub static ES: Translations = Translations {
    title: "SaaS Pulse",
    subtitle: "Panel de métricas de negocio en tiempo real",
    live: "En vivo",
    paused: "Pausado",
    refresh: "Actualizar",
    monthly_revenue: "Ingresos Mensuales",
    active_users: "Usuarios Activos",
    churn_rate: "Tasa de Abandono",
    new_customers: "Nuevos Clientes",
    revenue_trend: "Evolución de Ingresos",
    recent_transactions: "Transacciones Recientes",
    customer: "Cliente",
    plan: "Plan",
    amount: "Importe",
    status: "Estado",
    date: "Fecha",
    completed: "completado",
    pending: "pendiente",
    footer: "Desarrollado con Rust + Axum",
    currency: "€",
};

pub static EN: Translations = Translations {
    title: "SaaS Pulse",
    subtitle: "Real-time business metrics dashboard",
    live: "Live",
    paused: "Paused",
    refresh: "Refresh",
    monthly_revenue: "Monthly Revenue",
    active_users: "Active Users",
    churn_rate: "Churn Rate",
    new_customers: "New Customers",
    revenue_trend: "Revenue Trend",
    recent_transactions: "Recent Transactions",
    customer: "Customer",
    plan: "Plan",
    amount: "Amount",
    status: "Status",
    date: "Date",
    completed: "completed",
    pending: "pending",
    footer: "Built with Rust + Axum",
    currency: "€",
};

/// Single source of truth for the active UI language.
///
/// The store is meant to be shared (e.g. behind an `Arc`) by everything
/// that renders labels; a `toggle` or `set_language` is visible to all
/// subsequent reads without any refresh step. The translation record is
/// recomputed from the selector on every access so the two can never
/// desynchronize.
#[derive(Debug, Default)]
pub struct I18nStore {
    language: RwLock<Language>,
}

impl I18nStore {
    /// New store with the default language (Spanish).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current language selector value.
    pub fn language(&self) -> Language {
        *self.language.read().expect("language lock poisoned")
    }

    /// The label set for the currently selected language.
    pub fn t(&self) -> &'static Translations {
        self.language().translations()
    }

    /// Flip between Spanish and English.
    pub fn toggle(&self) {
        let mut language = self.language.write().expect("language lock poisoned");
        *language = language.toggled();
    }

    /// Select an explicit language. Idempotent.
    pub fn set_language(&self, lang: Language) {
        *self.language.write().expect("language lock poisoned") = lang;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn starts_in_spanish() {
        let store = I18nStore::new();
        assert_eq!(store.language(), Language::Es);
        assert_eq!(store.t().subtitle, ES.subtitle);
    }

    #[test]
    fn set_language_then_toggle() {
        let store = I18nStore::new();

        store.set_language(Language::En);
        assert_eq!(store.t().refresh, "Refresh");

        store.toggle();
        assert_eq!(store.t().refresh, "Actualizar");
    }

    #[test]
    fn toggle_is_self_inverse() {
        let store = I18nStore::new();
        let before = store.language();

        store.toggle();
        store.toggle();

        assert_eq!(store.language(), before);
    }

    #[test]
    fn set_language_is_idempotent() {
        let store = I18nStore::new();

        store.set_language(Language::Es);
        let once = store.t();
        store.set_language(Language::Es);

        assert_eq!(store.language(), Language::Es);
        assert_eq!(store.t(), once);
    }

    #[test]
    fn both_dictionaries_expose_the_same_keys() {
        let es = serde_json::to_value(&ES).unwrap();
        let en = serde_json::to_value(&EN).unwrap();

        let es_keys: Vec<_> = es.as_object().unwrap().keys().collect();
        let en_keys: Vec<_> = en.as_object().unwrap().keys().collect();
        assert_eq!(es_keys, en_keys);
    }

    #[test]
    fn writes_are_visible_through_shared_handles() {
        let store = Arc::new(I18nStore::new());
        let reader = Arc::clone(&store);

        store.set_language(Language::En);
        assert_eq!(reader.language(), Language::En);
        assert_eq!(reader.t().title, "SaaS Pulse");
    }

    #[test]
    fn language_serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
        assert_eq!(lang.as_str(), "en");
    }
}
