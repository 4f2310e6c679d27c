//! Sample data configuration for the demo backend.
//!
//! All fixture material lives here so the generators in `services` stay
//! free of literals.

pub struct Plan {
    pub name: &'static str,
    pub price: f64,
    pub weight: u32,
}

// Weighted towards the entry plan.
pub const PLANS: [Plan; 3] = [
    Plan { name: "Básico", price: 29.0, weight: 50 },
    Plan { name: "Profesional", price: 99.0, weight: 35 },
    Plan { name: "Empresa", price: 299.0, weight: 15 },
];

pub const SAMPLE_CUSTOMERS: [(&str, &str); 15] = [
    ("María", "García López"),
    ("Carlos", "Rodríguez Martínez"),
    ("Ana", "Fernández Sánchez"),
    ("Javier", "López Hernández"),
    ("Laura", "Martínez Ruiz"),
    ("Pedro", "Sánchez García"),
    ("Elena", "González Díaz"),
    ("Miguel", "Pérez Torres"),
    ("Lucía", "Romero Navarro"),
    ("David", "Jiménez Moreno"),
    ("Carmen", "Ruiz Molina"),
    ("Antonio", "Díaz Serrano"),
    ("Isabel", "Moreno Castro"),
    ("Francisco", "Álvarez Ortega"),
    ("Paula", "Muñoz Delgado"),
];

pub const EMAIL_DOMAINS: [&str; 8] = [
    "techsolutions.es",
    "innovatech.com",
    "dataservices.es",
    "cloudpyme.es",
    "digitalpro.com",
    "softwareib.es",
    "consultoriatech.com",
    "empresadigital.es",
];

/// Realistic KPI ranges for a growing SaaS.
pub struct KpiRanges {
    pub mrr_min: f64,
    pub mrr_max: f64,
    pub active_users_min: u64,
    pub active_users_max: u64,
    pub churn_rate_min: f64,
    pub churn_rate_max: f64,
    pub new_customers_min: u64,
    pub new_customers_max: u64,
    pub mrr_growth_min: f64,
    pub mrr_growth_max: f64,
}

pub const KPI_CONFIG: KpiRanges = KpiRanges {
    mrr_min: 15000.0,
    mrr_max: 45000.0,
    active_users_min: 200,
    active_users_max: 800,
    churn_rate_min: 2.0,
    churn_rate_max: 5.0,
    new_customers_min: 15,
    new_customers_max: 60,
    mrr_growth_min: 3.0,
    mrr_growth_max: 18.0,
};

/// Revenue time series shape.
pub struct RevenueConfig {
    /// Base daily revenue.
    pub base_daily_revenue: f64,
    /// Daily growth trend.
    pub growth_factor: f64,
    /// Random daily variance (+/-).
    pub volatility: f64,
    /// Weekend revenue multiplier.
    pub weekend_dip: f64,
}

pub const REVENUE_CONFIG: RevenueConfig = RevenueConfig {
    base_daily_revenue: 900.0,
    growth_factor: 1.5,
    volatility: 50.0,
    weekend_dip: 0.7,
};

/// Builds a realistic email address from a customer name: accents
/// stripped, lowercased, first part of the last name only.
pub fn generate_email(first_name: &str, last_name: &str, domain: &str) -> String {
    let first = normalize(first_name);
    let last = normalize(last_name.split_whitespace().next().unwrap_or(last_name));
    format!("{first}.{last}@{domain}")
}

fn normalize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'Á' | 'À' | 'Ä' | 'Â' => 'a',
            'É' | 'È' | 'Ë' | 'Ê' => 'e',
            'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
            'Ó' | 'Ò' | 'Ö' | 'Ô' => 'o',
            'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
            'Ñ' => 'n',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
