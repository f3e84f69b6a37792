//! Sanction list entries that screening should match against pool customers.

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, StreetName};
use rand::{Rng, RngCore};
use serde_json::{Value, json};

use super::{Actors, Built, base, pick, random_company};
use crate::reference::PEP_POSITIONS;

pub fn build(code: &str, a: &Actors<'_>, rng: &mut dyn RngCore) -> Option<Built> {
    let built = match code {
        "SANCTION_INDIVIDUAL" => {
            let record = individual(a, rng);
            let explanation = format!(
                "Sanction entry matching customer \"{}\" from pool. Fuzzy matching will trigger individual screening alert.",
                record["name"].as_str().unwrap_or_default()
            );
            Built::new(vec![record], explanation)
        }
        "SANCTION_CORPORATE" => {
            let record = corporate(a, rng);
            let explanation = format!(
                "Corporate sanction entry matching pool customer: \"{}\".",
                record["name"].as_str().unwrap_or_default()
            );
            Built::new(vec![record], explanation)
        }
        "SANCTION_PEP" => {
            let record = politically_exposed(a, rng);
            let explanation = format!(
                "PEP entry matching customer \"{}\", position: {}.",
                record["name"].as_str().unwrap_or_default(),
                record["position"].as_str().unwrap_or_default()
            );
            Built::new(vec![record], explanation)
        }
        "SANCTION_VESSEL" => {
            let record = vessel(a, rng);
            let explanation = format!(
                "Sanctioned vessel entry: \"{}\" with IMO {}.",
                record["name"].as_str().unwrap_or_default(),
                record["properties"]["imoNumber"][0].as_str().unwrap_or_default()
            );
            Built::new(vec![record], explanation)
        }
        "SANCTION_ASSET" => {
            let record = asset(a, rng);
            let explanation = format!(
                "Frozen asset entry: \"{}\" in {}.",
                record["name"].as_str().unwrap_or_default(),
                record["countryCodes"][0].as_str().unwrap_or_default()
            );
            Built::new(vec![record], explanation)
        }
        "SANCTION_ADVERSE_MEDIA" => {
            let record = adverse_media(a, rng);
            let explanation = format!(
                "Adverse media entry for \"{}\", linked to financial crime investigation.",
                record["name"].as_str().unwrap_or_default()
            );
            Built::new(vec![record], explanation)
        }
        _ => return None,
    };
    Some(built)
}

/// Listed person carrying the customer's exact name, a reversed-order alias
/// and a vowel-swapped alias.
fn individual(a: &Actors<'_>, rng: &mut dyn RngCore) -> Value {
    let name = a.customer_name(rng);
    let reversed: Vec<&str> = name.split(' ').rev().collect();
    let country = a.customer.country.map(|c| c.as_str()).unwrap_or("BD");
    let overrides = json!({
        "name": name,
        "caption": name,
        "aliases": [name, reversed.join(" "), name.replace(['a', 'A'], "e")],
        "dateOfBirth": a.customer.date_of_birth.as_deref().unwrap_or("1980-01-15"),
        "nationality": [a.customer.nationality.as_deref().unwrap_or("Bangladeshi")],
        "citizenships": [country],
        "countryCodes": [country],
        "entityType": "Individual",
        "schema": "Person",
        "searchText": name,
        "riskLevel": "CRITICAL",
    });
    base::sanction_entry(a.now, overrides, rng)
}

fn corporate(a: &Actors<'_>, rng: &mut dyn RngCore) -> Value {
    let business = match &a.customer.customer_name_eng {
        Some(name) => format!("{name} Enterprises Ltd"),
        None => format!("{} Trading Ltd", random_company(rng)),
    };
    let short = business.split(' ').next().unwrap_or_default();
    let overrides = json!({
        "name": business,
        "caption": business,
        "aliases": [business, business.replacen("Ltd", "Limited", 1), format!("{short} Corp")],
        "entityType": "Company",
        "schema": "Company",
        "organization": business,
        "searchText": business,
        "topics": ["sanction", "crime.fin", "entity"],
    });
    base::sanction_entry(a.now, overrides, rng)
}

fn politically_exposed(a: &Actors<'_>, rng: &mut dyn RngCore) -> Value {
    let name = a.customer_name(rng);
    let overrides = json!({
        "name": name,
        "caption": format!("{name} - Politically Exposed Person"),
        "aliases": [name],
        "dateOfBirth": a.customer.date_of_birth.as_deref().unwrap_or("1965-03-20"),
        "position": pick(PEP_POSITIONS, rng),
        "entityType": "Individual",
        "schema": "Person",
        "topics": ["role.pep", "gov.national", "poi"],
        "datasets": ["PEP_DATABASE", "WORLD_CHECK"],
        "searchText": name,
        "riskLevel": "HIGH",
    });
    base::sanction_entry(a.now, overrides, rng)
}

/// North Korean flagged cargo ship; independent of the customer.
fn vessel(a: &Actors<'_>, rng: &mut dyn RngCore) -> Value {
    let company = random_company(rng);
    let word = company.split_whitespace().next().unwrap_or("Ocean");
    let imo = rng.random_range(9_000_000..=9_999_999_u32).to_string();
    let overrides = json!({
        "name": format!("MV {word} Star"),
        "caption": "Sanctioned Vessel",
        "entityType": "Vessel",
        "schema": "Thing",
        "properties": { "imoNumber": [imo], "flag": ["KP"], "vesselType": ["Cargo"] },
        "topics": ["sanction", "transport", "debarment"],
        "datasets": ["OFAC_SDN", "UN_VESSELS"],
        "countryCodes": ["KP"],
        "searchText": "MV Star vessel sanctioned",
    });
    base::sanction_entry(a.now, overrides, rng)
}

/// Frozen Iranian real estate; independent of the customer.
fn asset(a: &Actors<'_>, rng: &mut dyn RngCore) -> Value {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let overrides = json!({
        "name": format!("Property {number} {street}"),
        "caption": "Sanctioned Asset",
        "entityType": "Asset",
        "schema": "Thing",
        "properties": { "type": ["Real Estate"], "registrationCountry": ["IR"] },
        "topics": ["sanction", "asset.frozen", "debarment"],
        "datasets": ["OFAC_SDN", "EU_SANCTIONS"],
        "countryCodes": ["IR"],
        "searchText": "property asset frozen sanctioned",
    });
    base::sanction_entry(a.now, overrides, rng)
}

fn adverse_media(a: &Actors<'_>, rng: &mut dyn RngCore) -> Value {
    let name = a.customer_name(rng);
    let overrides = json!({
        "name": name,
        "caption": format!("{name} - Adverse Media"),
        "aliases": [name],
        "entityType": "Individual",
        "schema": "Person",
        "topics": ["crime.fraud", "crime.fin", "media"],
        "datasets": ["ADVERSE_MEDIA_DB", "WORLD_CHECK"],
        "searchText": format!("{name} fraud money laundering investigation"),
        "riskLevel": "MEDIUM",
        "sourceUrl": "https://news.example.com/financial-crime-investigation",
    });
    base::sanction_entry(a.now, overrides, rng)
}
