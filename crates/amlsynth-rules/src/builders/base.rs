//! Rule-innocuous base records that builders override field by field.

use chrono::{DateTime, Datelike, Utc};
use rand::{Rng, RngCore};
use serde_json::{Value, json};

use amlsynth_generate::generators::primitives::{sentence, uuid};

use super::{
    account_number, amount, days_ago, days_ahead, hours_ago, overlay, pick, random_address,
    random_company, random_name, random_swift,
};
use crate::reference::{BD_BANKS, HS_CODES, PURPOSES};

/// Domestic BDT cash deposit from the last twelve hours.
pub fn transaction(
    customer_id: u64,
    account: &str,
    now: DateTime<Utc>,
    overrides: Value,
    rng: &mut dyn RngCore,
) -> Value {
    let base = json!({
        "reference": uuid(rng),
        "customerId": customer_id,
        "accountId": account,
        "amount": amount(10_000, 100_000, rng),
        "currency": "BDT",
        "exchangeRate": 1.0,
        "fees": amount(0, 500, rng),
        "type": "CASH_DEPOSIT",
        "direction": "IN",
        "timestamp": hours_ago(now, 0.0, 12.0, rng),
        "sender": random_name(rng),
        "receiver": random_name(rng),
        "senderAccount": account_number(rng),
        "receiverAccount": account_number(rng),
        "senderCountry": "BD",
        "receiverCountry": "BD",
        "paymentMethod": "Cash",
        "purpose": pick(PURPOSES, rng),
        "status": "Completed",
        "riskScore": rng.random_range(10..=40),
    });
    overlay(base, overrides)
}

pub fn invoice(now: DateTime<Utc>, overrides: Value, rng: &mut dyn RngCore) -> Value {
    let base = json!({
        "invoiceNumber": format!("INV-{}", rng.random_range(10_000..=99_999)),
        "invoiceDate": days_ago(now, rng.random_range(5..=30)),
        "sellerName": random_company(rng),
        "sellerAddress": random_address(rng),
        "sellerCountry": "CN",
        "buyerName": random_company(rng),
        "buyerAddress": random_address(rng),
        "buyerCountry": "BD",
        "currency": "USD",
        "totalAmount": amount(50_000, 500_000, rng),
        "taxAmount": amount(1_000, 10_000, rng),
        "freightAmount": amount(2_000, 15_000, rng),
        "insuranceAmount": amount(500, 5_000, rng),
        "discountAmount": 0,
        "netAmount": amount(50_000, 500_000, rng),
        "goodsDescription": "Industrial machinery parts and components",
        "hsCode": pick(HS_CODES, rng),
        "quantity": amount(100, 5_000, rng),
        "quantityUnit": "PCS",
        "unitPrice": amount(10, 500, rng),
        "incoterms": "FOB",
        "marketPriceRef": amount(10, 500, rng),
        "priceDeviation": hundredths(0.0, 5.0, rng),
        "overInvoicingFlag": false,
        "underInvoicingFlag": false,
        "priceAnomalyScore": hundredths(0.0, 10.0, rng),
        "documentsReceived": true,
        "documentsVerified": true,
        "discrepancyFound": false,
        "discrepancyDetails": "",
        "sanctionScreened": true,
        "complianceCleared": true,
    });
    overlay(base, overrides)
}

pub fn shipment(now: DateTime<Utc>, overrides: Value, rng: &mut dyn RngCore) -> Value {
    let vessel = random_company(rng);
    let vessel_word = vessel.split_whitespace().next().unwrap_or("Ocean");
    let base = json!({
        "shipmentNumber": format!("SH-{}", rng.random_range(10_000..=99_999)),
        "blNumber": format!("BL-{}", rng.random_range(100_000..=999_999)),
        "awbNumber": "",
        "shipmentDate": days_ago(now, rng.random_range(5..=20)),
        "estimatedArrival": days_ahead(now, rng.random_range(10..=40)),
        "actualArrival": null,
        "shipmentMode": "SEA",
        "vesselName": format!("MV {vessel_word} Star"),
        "vesselImo": rng.random_range(9_000_000..=9_999_999),
        "vesselFlag": "SG",
        "voyageNumber": format!("V{}", rng.random_range(100..=999)),
        "portOfLoading": "Shanghai",
        "portOfDischarge": "Chittagong",
        "transshipmentPort": "",
        "originCountry": "CN",
        "destinationCountry": "BD",
        "goodsDescription": "Industrial machinery parts",
        "hsCode": pick(HS_CODES, rng),
        "totalWeight": amount(5_000, 25_000, rng),
        "weightUnit": "KG",
        "packageCount": rng.random_range(10..=200),
        "containerNumbers": [format!("CONT{}", rng.random_range(100_000..=999_999))],
        "highRiskPortFlag": false,
        "sanctionedPortFlag": false,
        "sanctionedVesselFlag": false,
        "circuitousRouteFlag": false,
        "vesselScreened": true,
        "portsScreened": true,
        "customsClearance": false,
    });
    overlay(base, overrides)
}

pub fn party(role: &str, overrides: Value, rng: &mut dyn RngCore) -> Value {
    let country = match role {
        "BENEFICIARY" => "CN",
        _ => "BD",
    };
    let base = json!({
        "partyRole": role,
        "partyType": if role.contains("BANK") { "BANK" } else { "ENTITY" },
        "partyName": random_company(rng),
        "partyAddress": random_address(rng),
        "city": pick(&["Shanghai", "Dhaka", "Singapore", "Dubai"], rng),
        "country": country,
        "registrationNumber": rng.random_range(10_000_000..=99_999_999),
        "taxId": rng.random_range(10_000_000..=99_999_999),
        "swiftCode": random_swift(rng),
        "contactPerson": random_name(rng),
        "email": format!("contact{}@example.com", rng.random_range(100..=999)),
        "phone": format!("+880 {}", rng.random_range(1_300_000_000_u64..=1_999_999_999)),
        "sanctionScreened": true,
        "screeningResult": "CLEAR",
        "pepFlag": false,
        "adverseMediaFlag": false,
        "highRiskJurisdiction": false,
        "riskRating": "LOW",
    });
    overlay(base, overrides)
}

pub fn document(doc_type: &str, now: DateTime<Utc>, overrides: Value, rng: &mut dyn RngCore) -> Value {
    let readable = doc_type.replace('_', " ").to_lowercase();
    let base = json!({
        "documentType": doc_type,
        "documentNumber": format!("DOC-{}", rng.random_range(10_000..=99_999)),
        "documentDate": days_ago(now, rng.random_range(1..=15)),
        "description": format!("{readable} for LC trade"),
        "issuerName": random_company(rng),
        "issuerCountry": "CN",
        "fileName": format!("{}_{}.pdf", doc_type.to_lowercase(), rng.random_range(1_000..=9_999)),
        "fileType": "PDF",
        "fileSize": rng.random_range(50_000..=500_000),
        "verified": true,
        "discrepancyFound": false,
        "discrepancyNotes": "",
    });
    overlay(base, overrides)
}

pub fn amendment(now: DateTime<Utc>, overrides: Value, rng: &mut dyn RngCore) -> Value {
    let base = json!({
        "amendmentNumber": rng.random_range(1..=5),
        "swiftReference": format!("MT707{}", rng.random_range(1_000_000_000_u64..=9_999_999_999)),
        "amendmentDate": days_ago(now, rng.random_range(1..=30)),
        "amendmentType": pick(&["AMOUNT", "EXPIRY", "SHIPMENT", "DOCUMENTS", "TERMS"], rng),
        "amountChange": amount(-50_000, 50_000, rng),
        "oldAmount": amount(100_000, 500_000, rng),
        "newAmount": amount(100_000, 500_000, rng),
        "oldExpiryDate": days_ago(now, 10),
        "newExpiryDate": days_ahead(now, 60),
        "reason": sentence(rng),
        "requestedBy": random_company(rng),
        "frequentAmendmentFlag": false,
        "suspiciousChangeFlag": false,
        "status": "APPROVED",
    });
    overlay(base, overrides)
}

/// Sight import LC from China with one invoice, one shipment, the three core
/// parties and the three essential documents.
///
/// `amount` and `applicantName` in `overrides` also drive the derived
/// balance, insurance, collateral and applicant party.
pub fn letter_of_credit(
    customer_id: u64,
    account: &str,
    now: DateTime<Utc>,
    overrides: Value,
    rng: &mut dyn RngCore,
) -> Value {
    let lc_amount = overrides["amount"]
        .as_i64()
        .unwrap_or_else(|| amount(100_000, 2_000_000, rng));
    let applicant = match overrides["applicantName"].as_str() {
        Some(name) => name.to_string(),
        None => random_company(rng),
    };
    let base = json!({
        "lcNumber": format!("LC{}-{}", now.year(), rng.random_range(10_000_000..=99_999_999)),
        "swiftReference": format!("MT700{}", rng.random_range(1_000_000_000_u64..=9_999_999_999)),
        "customerId": customer_id,
        "applicantAccount": account,
        "lcType": "IMPORT",
        "status": "OPENED",
        "issueDate": days_ago(now, 30),
        "expiryDate": days_ahead(now, 150),
        "lastShipmentDate": days_ahead(now, 120),
        "latestDocPresentationDate": days_ahead(now, 140),
        "currency": "USD",
        "amount": lc_amount,
        "tolerancePercent": 5,
        "utilizedAmount": 0,
        "balanceAmount": lc_amount,
        "paymentTerms": "AT_SIGHT",
        "tenorDays": 0,
        "applicantName": applicant,
        "applicantAddress": random_address(rng),
        "applicantCountry": "BD",
        "beneficiaryName": random_company(rng),
        "beneficiaryAddress": format!("{} Industrial Rd, Shanghai", rng.random_range(1..=999)),
        "beneficiaryCountry": "CN",
        "beneficiaryBank": "Bank of China",
        "beneficiaryBankSwift": "BKCHCNBJ",
        "issuingBankName": pick(BD_BANKS, rng),
        "issuingBankSwift": random_swift(rng),
        "advisingBankName": "Bank of China Shanghai Branch",
        "advisingBankSwift": "BKCHCNBJ110",
        "confirmingBankName": "",
        "goodsDescription": "Industrial machinery parts and electronic components",
        "hsCode": "8471",
        "quantity": amount(500, 5_000, rng),
        "quantityUnit": "PCS",
        "unitPrice": amount(50, 500, rng),
        "shipmentMode": "SEA",
        "portOfLoading": "Shanghai",
        "portOfDischarge": "Chittagong",
        "originCountry": "CN",
        "destinationCountry": "BD",
        "transshipmentAllowed": false,
        "partialShipmentAllowed": false,
        "incoterms": "FOB",
        "insuranceRequired": true,
        "insuranceAmount": (lc_amount as f64 * 1.1).round() as i64,
        "transferableLc": false,
        "paymentToThirdParty": false,
        "paymentCountry": "CN",
        "collateralAmount": (lc_amount as f64 * 0.2).round() as i64,
        "contractReference": format!("CTR-{}", rng.random_range(10_000..=99_999)),
        "riskRating": "LOW",
        "sanctionScreened": true,
        "dualUseGoodsFlag": false,
        "highRiskCountryFlag": false,
        "priceAnomalyFlag": false,
        "amendments": [],
        "invoices": [invoice(now, json!({ "totalAmount": lc_amount, "netAmount": lc_amount }), rng)],
        "shipments": [shipment(now, json!({}), rng)],
        "parties": [
            party("APPLICANT", json!({ "partyName": applicant, "country": "BD" }), rng),
            party("BENEFICIARY", json!({ "country": "CN" }), rng),
            party("ISSUING_BANK", json!({ "partyType": "BANK", "country": "BD" }), rng),
        ],
        "documents": [
            document("BILL_OF_LADING", now, json!({}), rng),
            document("COMMERCIAL_INVOICE", now, json!({}), rng),
            document("CERTIFICATE_OF_ORIGIN", now, json!({}), rng),
        ],
    });
    overlay(base, overrides)
}

/// Individual on two sanction lists with Bangladeshi citizenship.
pub fn sanction_entry(now: DateTime<Utc>, overrides: Value, rng: &mut dyn RngCore) -> Value {
    let dob = format!(
        "{}-{:02}-{:02}",
        rng.random_range(1950..=1990),
        rng.random_range(1..=12),
        rng.random_range(1..=28)
    );
    let base = json!({
        "entityId": format!("SANC-{}", rng.random_range(100_000..=999_999)),
        "name": random_name(rng),
        "caption": random_name(rng),
        "aliases": [random_name(rng), random_name(rng), random_name(rng)],
        "dateOfBirth": dob,
        "citizenships": ["BD"],
        "nationality": ["Bangladeshi"],
        "countryCodes": ["BD"],
        "organization": "",
        "position": "",
        "entityType": "Individual",
        "schema": "Person",
        "datasets": ["UN_SANCTIONS", "OFAC_SDN"],
        "topics": ["sanction", "crime.terror", "poi"],
        "properties": { "nationality": ["Bangladeshi"], "gender": ["male"] },
        "riskLevel": "HIGH",
        "firstSeen": days_ago(now, 365),
        "lastSeen": days_ago(now, 1),
        "lastChange": days_ago(now, 7),
        "sourceUrl": "https://sanctionslist.example.com/entity/",
        "searchText": "",
    });
    overlay(base, overrides)
}

fn hundredths(min: f64, max: f64, rng: &mut dyn RngCore) -> f64 {
    (rng.random_range(min..max) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("now")
    }

    #[test]
    fn lc_derives_amounts_from_override() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let lc = letter_of_credit(500_123, "ACC-1", now(), json!({ "amount": 500_000 }), &mut rng);
        assert_eq!(lc["amount"], 500_000);
        assert_eq!(lc["balanceAmount"], 500_000);
        assert_eq!(lc["insuranceAmount"], 550_000);
        assert_eq!(lc["collateralAmount"], 100_000);
        assert_eq!(lc["invoices"][0]["totalAmount"], 500_000);
        assert!(lc["lcNumber"].as_str().expect("lc").starts_with("LC2024-"));
    }

    #[test]
    fn lc_applicant_name_flows_into_party() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let lc = letter_of_credit(1, "A", now(), json!({ "applicantName": "Karim Trading" }), &mut rng);
        assert_eq!(lc["parties"][0]["partyName"], "Karim Trading");
        assert_eq!(lc["parties"][0]["partyRole"], "APPLICANT");
    }

    #[test]
    fn party_type_follows_role() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(party("CONFIRMING_BANK", json!({}), &mut rng)["partyType"], "BANK");
        assert_eq!(party("BROKER", json!({}), &mut rng)["partyType"], "ENTITY");
        assert_eq!(party("BENEFICIARY", json!({}), &mut rng)["country"], "CN");
    }

    #[test]
    fn transaction_overrides_win() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let txn = transaction(7, "ACC", now(), json!({ "amount": 42, "type": "SWIFT" }), &mut rng);
        assert_eq!(txn["amount"], 42);
        assert_eq!(txn["type"], "SWIFT");
        assert_eq!(txn["customerId"], 7);
        assert_eq!(txn["currency"], "BDT");
    }
}
