//! Letter-of-credit scenarios for the TBML rules and the advanced typologies.

use rand::{Rng, RngCore};
use serde_json::{Value, json};
use sha2::{Digest, Sha256};

use super::{
    Actors, Built, amount, base, days_ago, days_ahead, pick, random_address, random_company, scaled,
};
use crate::format::thousands;
use crate::reference::{
    BMPE_CORRIDORS, FATF_BLACKLIST, FTZ_PORTS, HIGH_RISK_GOODS_KEYWORDS, SANCTIONED_COUNTRIES,
    SHELL_JURISDICTIONS,
};

pub fn build(code: &str, a: &Actors<'_>, rng: &mut dyn RngCore) -> Option<Built> {
    let now = a.now;
    let built = match code {
        "TBML-001" => {
            let shared = random_address(rng);
            let applicant = match &a.customer.customer_name_eng {
                Some(name) => format!("{name} Trading"),
                None => random_company(rng),
            };
            let parties = json!([
                base::party("APPLICANT", json!({ "partyName": applicant, "partyAddress": shared, "country": "BD" }), rng),
                base::party("BENEFICIARY", json!({ "partyAddress": shared, "country": "CN" }), rng),
                base::party("ISSUING_BANK", json!({ "partyType": "BANK", "country": "BD" }), rng),
            ]);
            let overrides = json!({
                "applicantName": applicant,
                "applicantAddress": shared,
                "beneficiaryAddress": shared,
                "parties": parties,
            });
            one(
                lc(a, overrides, rng),
                "Applicant and beneficiary share the same address, a related party indicator.",
            )
        }
        "TBML-002" => {
            const RESIDENTIAL: &str = "House 42, Flat 3B, Apartment Complex, Dhanmondi, Dhaka";
            let parties = json!([
                base::party("APPLICANT", json!({ "country": "BD" }), rng),
                base::party("BENEFICIARY", json!({ "partyAddress": RESIDENTIAL, "country": "CN" }), rng),
                base::party("ISSUING_BANK", json!({ "partyType": "BANK" }), rng),
            ]);
            let overrides = json!({ "beneficiaryAddress": RESIDENTIAL, "parties": parties });
            one(
                lc(a, overrides, rng),
                "Beneficiary address contains residential keywords (House, Flat, Apartment).",
            )
        }
        "TBML-003" => {
            let record = lc(a, json!({ "issueDate": days_ago(now, 0), "expiryDate": days_ahead(now, 5) }), rng);
            let explanation = format!(
                "LC validity < 7 days (issued {}, expires {}), extreme pressure.",
                record["issueDate"].as_str().unwrap_or_default(),
                record["expiryDate"].as_str().unwrap_or_default()
            );
            one(record, explanation)
        }
        "TBML-004" => {
            let parties = json!([
                base::party("APPLICANT", json!({ "pepFlag": true, "riskRating": "HIGH", "country": "BD" }), rng),
                base::party("BENEFICIARY", json!({ "country": "CN" }), rng),
                base::party("ISSUING_BANK", json!({ "partyType": "BANK" }), rng),
            ]);
            one(lc(a, json!({ "parties": parties }), rng), "LC applicant has PEP flag set.")
        }
        "TBML-005" => {
            let parties = json!([
                base::party("APPLICANT", json!({ "country": "BD" }), rng),
                base::party("BENEFICIARY", json!({ "country": "CN" }), rng),
                base::party("BROKER", json!({ "partyAddress": "", "country": "", "partyName": "Unknown Agent" }), rng),
                base::party("ISSUING_BANK", json!({ "partyType": "BANK" }), rng),
            ]);
            one(
                lc(a, json!({ "parties": parties }), rng),
                "Broker/intermediary party with missing address and country.",
            )
        }
        "TBML-006" => {
            let parties = parties_in(
                &[
                    ("APPLICANT", "BD"),
                    ("BENEFICIARY", "CN"),
                    ("ISSUING_BANK", "BD"),
                    ("BROKER", "SG"),
                    ("FREIGHT_FORWARDER", "AE"),
                    ("INTERMEDIARY", "HK"),
                    ("THIRD_PARTY_BENEFICIARY", "MY"),
                ],
                rng,
            );
            let count = parties.as_array().map_or(0, Vec::len);
            let explanation = format!(
                "LC has {count} parties including 4 non-core intermediaries (threshold: >3)."
            );
            one(lc(a, json!({ "parties": parties }), rng), explanation)
        }
        "TBML-007" => {
            let parties = parties_in(
                &[
                    ("APPLICANT", "BD"),
                    ("BENEFICIARY", "CN"),
                    ("ISSUING_BANK", "BD"),
                    ("CONFIRMING_BANK", "SG"),
                    ("BROKER", "AE"),
                ],
                rng,
            );
            let overrides = json!({ "transferableLc": true, "transshipmentAllowed": true, "parties": parties });
            one(
                lc(a, overrides, rng),
                "LC is transferable + transshipment allowed + 5 countries involved: complex structure.",
            )
        }
        "TBML-008" => one(
            lc(a, json!({ "goodsDescription": "Live cattle and livestock", "hsCode": "0102" }), rng),
            "LC goods (livestock) unlikely to match customer trade profile.",
        ),
        "TBML-009" => one(
            lc(a, json!({ "goodsDescription": "Various goods as per proforma invoice - assignable - bearer instrument - without recourse to drawer" }), rng),
            "LC contains suspicious terms: \"assignable\", \"bearer instrument\", \"without recourse\".",
        ),
        "TBML-010" => {
            let amendments: Vec<Value> = (0..5)
                .map(|idx| {
                    let overrides = json!({
                        "amendmentNumber": idx + 1,
                        "frequentAmendmentFlag": idx >= 2,
                        "suspiciousChangeFlag": idx >= 3,
                        "amendmentType": pick(&["AMOUNT", "BENEFICIARY", "TERMS", "EXPIRY", "GOODS"], rng),
                    });
                    base::amendment(now, overrides, rng)
                })
                .collect();
            one(
                lc(a, json!({ "status": "AMENDED", "amendments": amendments }), rng),
                "LC has 5 amendments (threshold: >=3 medium, >=5 high).",
            )
        }
        "TBML-011" => {
            let shell = pick(SHELL_JURISDICTIONS, rng);
            let parties = json!([
                base::party("APPLICANT", json!({ "country": "BD" }), rng),
                base::party("BENEFICIARY", json!({ "country": shell, "highRiskJurisdiction": true }), rng),
                base::party("ISSUING_BANK", json!({ "partyType": "BANK" }), rng),
            ]);
            let record = lc(a, json!({ "beneficiaryCountry": shell, "parties": parties }), rng);
            one(record, format!("Beneficiary registered in shell jurisdiction: {shell}."))
        }
        "TBML-012" => one(
            lc(a, json!({ "lcType": "STANDBY", "contractReference": "" }), rng),
            "Standby LC (guarantee) without underlying contract reference.",
        ),
        "TBML-013" => one(
            lc(a, json!({ "status": "OPENED", "invoices": [], "shipments": [] }), rng),
            "Active LC with zero invoices and zero shipments, possible fake trade.",
        ),
        "TBML-014" => one(
            pricing_anomaly(a, Pricing::Unusual, rng),
            "Invoice unit price deviates >50% from market reference price.",
        ),
        "TBML-015" => one(
            pricing_anomaly(a, Pricing::Under, rng),
            "Invoice flagged for under-invoicing (unit price 10% of market).",
        ),
        "TBML-016" => one(
            pricing_anomaly(a, Pricing::Over, rng),
            "Invoice flagged for over-invoicing (unit price 10x market).",
        ),
        "TBML-017" => {
            const LC_AMOUNT: i64 = 500_000;
            let invoice = base::invoice(
                now,
                json!({
                    "totalAmount": LC_AMOUNT,
                    "freightAmount": LC_AMOUNT / 10,
                    "insuranceAmount": LC_AMOUNT * 8 / 100,
                    "taxAmount": LC_AMOUNT * 5 / 100,
                }),
                rng,
            );
            one(
                lc(a, json!({ "amount": LC_AMOUNT, "invoices": [invoice] }), rng),
                "Freight + insurance + tax charges exceed 23% of LC value (threshold: 15%).",
            )
        }
        "TBML-018" => {
            let seller = random_company(rng);
            let value = amount(100_000, 500_000, rng);
            let invoice = json!({ "sellerName": seller, "totalAmount": value, "netAmount": value });
            let invoices = json!([
                base::invoice(now, invoice.clone(), rng),
                base::invoice(now, invoice, rng),
            ]);
            one(
                lc(a, json!({ "invoices": invoices }), rng),
                "Two invoices with identical seller and amount: double invoicing.",
            )
        }
        "TBML-019" => one(
            lc(a, json!({ "paymentTerms": "AT_SIGHT", "tenorDays": 90 }), rng),
            "Payment terms say AT_SIGHT but tenor is 90 days, which is inconsistent.",
        ),
        "TBML-020" => one(
            lc(a, json!({ "paymentToThirdParty": true }), rng),
            "Payment directed to third party (paymentToThirdParty = true).",
        ),
        "TBML-021" => one(
            lc(a, json!({ "beneficiaryCountry": "CN", "paymentCountry": "AE" }), rng),
            "Payment country (AE) differs from beneficiary country (CN).",
        ),
        "TBML-022" => {
            let amendment = base::amendment(
                now,
                json!({
                    "amendmentType": "BENEFICIARY",
                    "suspiciousChangeFlag": true,
                    "reason": "Change of beneficiary bank account and payment routing",
                }),
                rng,
            );
            one(
                lc(a, json!({ "amendments": [amendment] }), rng),
                "Suspicious amendment changing beneficiary bank routing.",
            )
        }
        "TBML-023" => one(
            lc(a, json!({ "goodsDescription": "Electronic components as per contract - payment subject to applicant approval and buyer discretion" }), rng),
            "Terms contain \"applicant approval\" and \"buyer discretion\" clauses.",
        ),
        "TBML-024" => {
            let overrides = json!({
                "lcType": "STANDBY",
                "issueDate": days_ago(now, 15),
                "status": "UTILIZED",
                "utilizedAmount": amount(300_000, 800_000, rng),
            });
            one(
                lc(a, overrides, rng),
                "Standby LC utilized within 15 days of issue (threshold: <30 days).",
            )
        }
        "TBML-025" => {
            let overrides = json!({
                "lcType": "STANDBY",
                "collateralAmount": 0,
                "amount": amount(5_000_000, 20_000_000, rng),
            });
            one(lc(a, overrides, rng), "Letter of Undertaking with zero collateral amount.")
        }
        "TBML-026" => one(
            lc(a, json!({ "status": "OPENED", "shipments": [], "documents": [] }), rng),
            "Active LC with empty shipments[] and empty documents[]: phantom shipment.",
        ),
        "TBML-027" => one(
            lc(a, json!({ "goodsDescription": "General merchandise and various goods as described" }), rng),
            "Vague goods description: \"General merchandise and various goods\".",
        ),
        "TBML-028" => {
            let record = lc(a, json!({ "amount": amount(5_000_000, 15_000_000, rng) }), rng);
            let explanation = format!(
                "LC amount BDT {}, expected to exceed the customer average by more than 50%.",
                thousands(record["amount"].as_i64().unwrap_or_default())
            );
            one(record, explanation)
        }
        "TBML-029" => one(
            lc(
                a,
                json!({
                    "dualUseGoodsFlag": true,
                    "goodsDescription": "Centrifuge equipment and precision machining tools for industrial use",
                    "hsCode": "8456",
                }),
                rng,
            ),
            "Dual-use goods flag set. Goods: centrifuge equipment and precision machining tools.",
        ),
        "TBML-030" => {
            let invoice = base::invoice(now, json!({ "hsCode": "6204" }), rng);
            one(
                lc(a, json!({ "hsCode": "8471", "invoices": [invoice] }), rng),
                "LC HS code 8471 (computers) but invoice HS code 6204 (clothing): mismatch.",
            )
        }
        "TBML-031" => {
            // 28,000 KG per package with 10% slack caps one package at 30,800 KG.
            let shipment = base::shipment(
                now,
                json!({ "totalWeight": 35_000, "weightUnit": "KG", "packageCount": 1 }),
                rng,
            );
            one(
                lc(a, json!({ "shipments": [shipment] }), rng),
                "Declared weight 35,000 KG in 1 package exceeds capacity (28,000 x 1 x 1.1 = 30,800 KG).",
            )
        }
        "TBML-032" => {
            let keyword = pick(HIGH_RISK_GOODS_KEYWORDS, rng);
            let description = format!("Refined {keyword} bars and {keyword} products for export");
            one(
                lc(a, json!({ "goodsDescription": description }), rng),
                "Goods description contains high-risk keyword.",
            )
        }
        "TBML-033" => {
            let shipment = base::shipment(
                now,
                json!({
                    "circuitousRouteFlag": true,
                    "originCountry": "CN",
                    "destinationCountry": "BD",
                    "transshipmentPort": "Durban",
                }),
                rng,
            );
            one(
                lc(a, json!({ "shipments": [shipment] }), rng),
                "Circuitous route flag set: CN to BD shipment via Durban (South Africa).",
            )
        }
        "TBML-034" => {
            let shipment = base::shipment(
                now,
                json!({ "transshipmentPort": "Colombo", "originCountry": "CN", "destinationCountry": "BD" }),
                rng,
            );
            one(
                lc(a, json!({ "transshipmentAllowed": true, "shipments": [shipment] }), rng),
                "Transshipment via Colombo with no documented justification.",
            )
        }
        "TBML-035" => one(
            lc(a, json!({ "shipmentMode": "", "portOfLoading": "", "portOfDischarge": "" }), rng),
            "Missing shipping mode, port of loading, and port of discharge.",
        ),
        "TBML-036" => {
            let shipment = base::shipment(now, json!({ "originCountry": "VN", "destinationCountry": "BD" }), rng);
            one(
                lc(a, json!({ "beneficiaryCountry": "CN", "shipments": [shipment] }), rng),
                "Beneficiary in CN but shipment origin is VN: country mismatch.",
            )
        }
        "TBML-037" => {
            let shipment = base::shipment(now, json!({ "vesselName": "", "vesselImo": 0 }), rng);
            one(
                lc(a, json!({ "shipmentMode": "SEA", "shipments": [shipment] }), rng),
                "Sea shipment with empty vessel name and zero IMO: untrackable.",
            )
        }
        "TBML-038" => {
            let shipment = base::shipment(now, json!({ "containerNumbers": [], "packageCount": 50 }), rng);
            one(
                lc(a, json!({ "shipments": [shipment] }), rng),
                "50 packages declared but no container numbers provided.",
            )
        }
        "TBML-039" => {
            let country = pick(FATF_BLACKLIST, rng);
            let parties = json!([
                base::party("APPLICANT", json!({ "country": "BD" }), rng),
                base::party(
                    "BENEFICIARY",
                    json!({ "country": country, "highRiskJurisdiction": true, "riskRating": "CRITICAL" }),
                    rng,
                ),
                base::party("ISSUING_BANK", json!({ "partyType": "BANK" }), rng),
            ]);
            let overrides = json!({
                "beneficiaryCountry": country,
                "highRiskCountryFlag": true,
                "parties": parties,
            });
            one(
                lc(a, overrides, rng),
                format!("Beneficiary from FATF blacklist country: {country}."),
            )
        }
        "TBML-040" => one(
            lc(a, json!({ "highRiskCountryFlag": true }), rng),
            "LC highRiskCountryFlag is set to true.",
        ),
        "TBML-041" => {
            let country = pick(SANCTIONED_COUNTRIES, rng);
            let parties = json!([
                base::party("APPLICANT", json!({ "country": "BD" }), rng),
                base::party(
                    "BENEFICIARY",
                    json!({
                        "screeningResult": "HIT",
                        "sanctionScreened": true,
                        "riskRating": "CRITICAL",
                        "country": country,
                    }),
                    rng,
                ),
                base::party("ISSUING_BANK", json!({ "partyType": "BANK" }), rng),
            ]);
            one(
                lc(a, json!({ "parties": parties }), rng),
                "Beneficiary screening result: HIT (sanctioned entity).",
            )
        }
        "TBML-042" => {
            let invoice = base::invoice(
                now,
                json!({ "discrepancyFound": true, "discrepancyDetails": "Goods description does not match BL" }),
                rng,
            );
            let document = base::document(
                "COMMERCIAL_INVOICE",
                now,
                json!({ "discrepancyFound": true, "discrepancyNotes": "Amount mismatch between invoice and LC" }),
                rng,
            );
            one(
                lc(a, json!({ "invoices": [invoice], "documents": [document] }), rng),
                "Invoice and document have discrepancyFound = true.",
            )
        }
        "TBML-043" => one(
            lc(a, json!({ "goodsDescription": "Goods per contract - all discrepancy acceptable - documents may be presented in any form" }), rng),
            "LC goods description includes \"all discrepancy acceptable\" clause.",
        ),
        "TBML-044" => {
            let packing = base::document("PACKING_LIST", now, json!({}), rng);
            one(
                lc(a, json!({ "status": "DOCUMENTS_RECEIVED", "documents": [packing] }), rng),
                "Only packing list present: missing bill of lading, invoice, and certificate of origin.",
            )
        }
        "TBML-045" => {
            const LC_AMOUNT: i64 = 500_000;
            let overrides = json!({
                "amount": LC_AMOUNT,
                "utilizedAmount": LC_AMOUNT * 115 / 100,
                "balanceAmount": -(LC_AMOUNT * 15 / 100),
            });
            one(
                lc(a, overrides, rng),
                "Utilized amount is 115% of LC amount (threshold: 110%).",
            )
        }
        "TBML-046" => {
            let documents: Vec<Value> = [
                ("COMMERCIAL_INVOICE", "Minor amount discrepancy"),
                ("BILL_OF_LADING", "Date inconsistency"),
                ("CERTIFICATE_OF_ORIGIN", "Country code mismatch"),
                ("PACKING_LIST", "Weight discrepancy"),
            ]
            .into_iter()
            .map(|(kind, notes)| {
                base::document(kind, now, json!({ "discrepancyFound": true, "discrepancyNotes": notes }), rng)
            })
            .collect();
            one(
                lc(a, json!({ "documents": documents }), rng),
                "4 documents with discrepancies accepted (threshold: >3).",
            )
        }
        "TBML-047" => {
            let document = base::document(
                "COMMERCIAL_INVOICE",
                now,
                json!({ "discrepancyFound": true, "verified": false, "discrepancyNotes": "Document appears altered" }),
                rng,
            );
            one(
                lc(a, json!({ "documents": [document] }), rng),
                "Document has discrepancy AND failed verification: possibly altered.",
            )
        }
        "TBML-048" => Built::new(
            reused_documents(a, rng),
            "Two LCs carry a bill of lading with the same document hash: trade documents reused across LCs.",
        ),
        "ADV-001" => {
            let records = [("IMPORT", "CN", "BD", 80), ("EXPORT", "BD", "CN", 50), ("IMPORT", "CN", "BD", 20)]
                .into_iter()
                .map(|(kind, origin, destination, age)| {
                    let overrides = json!({
                        "lcType": kind,
                        "originCountry": origin,
                        "destinationCountry": destination,
                        "issueDate": days_ago(now, age),
                    });
                    lc(a, overrides, rng)
                })
                .collect();
            Built::new(
                records,
                "3 LCs between BD and CN in alternating directions within 90 days: carousel trading.",
            )
        }
        "ADV-002" => {
            let parties = parties_in(
                &[
                    ("APPLICANT", "BD"),
                    ("BENEFICIARY", "AE"),
                    ("BROKER", "SG"),
                    ("FREIGHT_FORWARDER", "PA"),
                    ("THIRD_PARTY_BENEFICIARY", "HK"),
                    ("ISSUING_BANK", "BD"),
                ],
                rng,
            );
            one(
                lc(a, json!({ "parties": parties }), rng),
                "LC with 6 parties across 5 jurisdictions (BD, AE, SG, PA, HK): trade-based layering.",
            )
        }
        "ADV-003" => {
            let port = pick(FTZ_PORTS, rng);
            let shipment = base::shipment(now, json!({ "transshipmentPort": port, "portOfLoading": port }), rng);
            one(
                lc(a, json!({ "shipments": [shipment], "transshipmentAllowed": true }), rng),
                format!("Trade routed through Free Trade Zone port: {port}."),
            )
        }
        "ADV-004" => {
            let value = amount(500_000, 2_000_000, rng);
            let import = json!({
                "lcType": "IMPORT",
                "amount": value,
                "originCountry": "CN",
                "destinationCountry": "BD",
                "issueDate": days_ago(now, 3),
            });
            let export = json!({
                "lcType": "EXPORT",
                "amount": scaled(value, 0.96, 1.04, rng),
                "originCountry": "BD",
                "destinationCountry": "CN",
                "issueDate": days_ago(now, 1),
            });
            Built::new(
                vec![lc(a, import, rng), lc(a, export, rng)],
                "Mirror trade: 2 LCs with matching amounts in opposite directions within 7 days.",
            )
        }
        "ADV-005" => {
            let (from, to) = BMPE_CORRIDORS[rng.random_range(0..BMPE_CORRIDORS.len())];
            let overrides = json!({
                "applicantCountry": from,
                "beneficiaryCountry": to,
                "originCountry": from,
                "destinationCountry": to,
            });
            one(
                lc(a, overrides, rng),
                format!("Trade on BMPE corridor: {from} to {to}."),
            )
        }
        "ADV-006" => {
            const LC_QUANTITY: i64 = 1_000;
            let invoice = base::invoice(now, json!({ "quantity": LC_QUANTITY * 125 / 100 }), rng);
            one(
                lc(a, json!({ "quantity": LC_QUANTITY, "invoices": [invoice] }), rng),
                "Invoice quantity 25% higher than LC declared quantity (threshold: >10%).",
            )
        }
        "ADV-007" => {
            const LCAF_VALUE: i64 = 500_000;
            one(
                lc(a, json!({ "amount": LCAF_VALUE * 112 / 100 }), rng),
                "LC amount exceeds authorized LCAF value by 12% (threshold: >5%).",
            )
        }
        "ADV-008" => one(
            lc(
                a,
                json!({
                    "originCountry": "BD",
                    "hsCode": "8471",
                    "goodsDescription": "Advanced computer servers and networking equipment",
                }),
                rng,
            ),
            "Computer equipment (HS 8471) exported from BD, not in the typical export basket.",
        ),
        "ADV-009" => {
            let collateral = format!("CLT-{}", rng.random_range(10_000..=99_999));
            let overrides = json!({
                "contractReference": collateral,
                "collateralAmount": 200_000,
                "status": "OPENED",
            });
            Built::new(
                vec![lc(a, overrides.clone(), rng), lc(a, overrides, rng)],
                "Two active LCs using the same collateral reference.",
            )
        }
        "ADV-010" => {
            let value = amount(1_000_000, 5_000_000, rng);
            let overrides = json!({
                "amount": value,
                "utilizedAmount": value * 6 / 10,
                "paymentTerms": "RED_CLAUSE",
            });
            one(
                lc(a, overrides, rng),
                "60% advance payment on RED_CLAUSE LC (threshold: >50%).",
            )
        }
        _ => return None,
    };
    Some(built)
}

fn lc(a: &Actors<'_>, overrides: Value, rng: &mut dyn RngCore) -> Value {
    base::letter_of_credit(a.customer.customer_id, &a.account, a.now, overrides, rng)
}

fn one(record: Value, explanation: impl Into<String>) -> Built {
    Built::new(vec![record], explanation)
}

fn parties_in(roles: &[(&str, &str)], rng: &mut dyn RngCore) -> Value {
    roles
        .iter()
        .map(|(role, country)| base::party(role, json!({ "country": country }), rng))
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Pricing {
    Over,
    Under,
    Unusual,
}

fn pricing_anomaly(a: &Actors<'_>, pricing: Pricing, rng: &mut dyn RngCore) -> Value {
    let mut invoice = json!({
        "priceDeviation": if matches!(pricing, Pricing::Unusual) { 65 } else { 85 },
        "priceAnomalyScore": 80,
        "marketPriceRef": 500,
    });
    match pricing {
        Pricing::Over => {
            invoice["overInvoicingFlag"] = json!(true);
            invoice["unitPrice"] = json!(5_000);
        }
        Pricing::Under => {
            invoice["underInvoicingFlag"] = json!(true);
            invoice["unitPrice"] = json!(50);
        }
        Pricing::Unusual => invoice["unitPrice"] = json!(2_500),
    }
    let invoice = base::invoice(a.now, invoice, rng);
    lc(a, json!({ "priceAnomalyFlag": true, "invoices": [invoice] }), rng)
}

/// Two LCs whose bills of lading carry the digest of one document number.
fn reused_documents(a: &Actors<'_>, rng: &mut dyn RngCore) -> Vec<Value> {
    let original = format!("DOC-{}", rng.random_range(10_000..=99_999));
    let hash = hex::encode(Sha256::digest(original.as_bytes()));
    (0..2)
        .map(|_| {
            let documents = json!([
                base::document("BILL_OF_LADING", a.now, json!({ "documentNumber": original, "documentHash": hash }), rng),
                base::document("COMMERCIAL_INVOICE", a.now, json!({}), rng),
            ]);
            lc(a, json!({ "documents": documents }), rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlsynth_generate::{CustomerPoolEntry, IdentityPool};
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scenario(code: &str, seed: u64) -> Built {
        let pool = IdentityPool::in_memory();
        let customer = CustomerPoolEntry::new(500_123).with_name("Rafiqul Islam");
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).single().expect("now");
        let actors = Actors { customer: &customer, account: "2001".into(), pool: &pool, now };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        build(code, &actors, &mut rng).expect("trade code")
    }

    #[test]
    fn related_party_shares_address_and_names_applicant() {
        let built = scenario("TBML-001", 1);
        let record = &built.records[0];
        assert_eq!(record["applicantAddress"], record["beneficiaryAddress"]);
        assert_eq!(record["applicantName"], "Rafiqul Islam Trading");
        assert_eq!(record["parties"][0]["partyName"], "Rafiqul Islam Trading");
        assert_eq!(record["customerId"], 500_123);
        assert_eq!(record["applicantAccount"], "2001");
    }

    #[test]
    fn excessive_charges_exceed_fifteen_percent() {
        let record = &scenario("TBML-017", 2).records[0];
        let invoice = &record["invoices"][0];
        let charges = ["freightAmount", "insuranceAmount", "taxAmount"]
            .iter()
            .map(|key| invoice[*key].as_i64().expect("charge"))
            .sum::<i64>();
        assert_eq!(charges, 115_000);
        assert!(charges as f64 / record["amount"].as_f64().expect("amount") > 0.15);
    }

    #[test]
    fn short_validity_expires_within_a_week() {
        let record = &scenario("TBML-003", 3).records[0];
        assert_eq!(record["issueDate"], "2024-06-15");
        assert_eq!(record["expiryDate"], "2024-06-20");
    }

    #[test]
    fn carousel_alternates_directions() {
        let built = scenario("ADV-001", 4);
        let kinds: Vec<&str> = built.records.iter().map(|r| r["lcType"].as_str().expect("type")).collect();
        assert_eq!(kinds, ["IMPORT", "EXPORT", "IMPORT"]);
    }

    #[test]
    fn reused_documents_share_a_sha256_digest() {
        let built = scenario("TBML-048", 6);
        assert_eq!(built.records.len(), 2);
        let first = &built.records[0]["documents"][0];
        let second = &built.records[1]["documents"][0];
        let number = first["documentNumber"].as_str().expect("number");
        let expected = hex::encode(Sha256::digest(number.as_bytes()));
        assert_eq!(first["documentHash"], json!(expected));
        assert_eq!(first["documentHash"], second["documentHash"]);
        assert_ne!(built.records[0]["lcNumber"], built.records[1]["lcNumber"]);
    }

    #[test]
    fn hawala_advance_is_sixty_percent() {
        let record = &scenario("ADV-010", 5).records[0];
        let amount = record["amount"].as_i64().expect("amount");
        assert_eq!(record["utilizedAmount"].as_i64(), Some(amount * 6 / 10));
        assert_eq!(record["paymentTerms"], "RED_CLAUSE");
    }
}
