//! Query DTOs - Parametri di ricerca sulla lista dei fornitori

/// Query parameters di `GET /suppliers?category=...&name=...&available=...`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SupplierQuery {
    pub category: Option<String>,
    pub name: Option<String>,
    pub available: Option<String>,
}

/// Predicato di ricerca passato al repository
#[derive(Debug, Clone, PartialEq)]
pub enum SupplierFilter {
    All,
    Category(String),
    Name(String),
    Availability(bool),
}

impl SupplierQuery {
    /// Costruisce la query dalle coppie chiave/valore della query string.
    /// Per ogni chiave vale la prima occorrenza, le chiavi sconosciute sono ignorate.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut query.category,
                "name" => &mut query.name,
                "available" => &mut query.available,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Sceglie un solo filtro: category ha la precedenza su name, name su available.
    /// I valori vuoti sono trattati come assenti.
    pub fn filter(&self) -> SupplierFilter {
        if let Some(category) = non_empty(&self.category) {
            SupplierFilter::Category(category.to_string())
        } else if let Some(name) = non_empty(&self.name) {
            SupplierFilter::Name(name.to_string())
        } else if let Some(available) = non_empty(&self.available) {
            SupplierFilter::Availability(parse_flag(available))
        } else {
            SupplierFilter::All
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "yes" | "1")
}
