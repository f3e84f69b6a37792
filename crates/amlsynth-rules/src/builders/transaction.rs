//! Transaction monitoring scenarios: cash, structuring, velocity, thresholds,
//! behaviour, geography, PEP, account activity, layering and SWIFT.

use rand::{Rng, RngCore};
use serde_json::{Value, json};

use amlsynth_generate::CustomerPoolEntry;

use super::{
    Actors, Built, account_number, amount, amount_of, base, hours_ago, pick, pick_n, random_name,
    scaled, slot_ago, text_of, total,
};
use crate::format::thousands;
use crate::reference::{
    BD_NAMES, FATF_BLACKLIST, LANDLOCKED, PURPOSES, SANCTIONED_COUNTRIES, TAX_HAVENS,
};

/// Scenario for a transaction rule, `None` for codes of other families.
pub fn build(code: &str, a: &Actors<'_>, rng: &mut dyn RngCore) -> Option<Built> {
    let customer = a.customer.customer_id;
    let built = match code {
        "CASH_THRESHOLD" => {
            let records = single(a, Single::new(amount(1_100_000, 1_500_000, rng), "CASH_DEPOSIT", "Cash"), rng);
            let explanation = format!(
                "Single cash deposit of BDT {} exceeds CTR threshold (BDT 1,000,000). Customer: {}.",
                thousands(amount_of(&records[0])),
                a.customer_label()
            );
            Built::new(records, explanation)
        }
        "CASH_DEPOSIT_ANOMALY" => {
            let records = single(a, Single::new(amount(600_000, 900_000, rng), "CASH_DEPOSIT", "Cash"), rng);
            let explanation = format!(
                "Large cash deposit of BDT {}, expected to exceed 200% of 90-day average for customer {customer}.",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "CASH_VS_INSTRUMENT_RATIO" => {
            let records = (0..7)
                .map(|_| {
                    let overrides = json!({
                        "amount": amount(50_000, 200_000, rng),
                        "type": "CASH_DEPOSIT",
                        "direction": "IN",
                        "paymentMethod": "Cash",
                        "timestamp": hours_ago(a.now, 0.0, 600.0, rng),
                    });
                    txn(a, &a.account, overrides, rng)
                })
                .collect();
            Built::new(
                records,
                format!("7 cash transactions out of 7 total (100% cash ratio > 80% threshold) within 30 days for customer {customer}."),
            )
        }
        "DENOMINATION_EXCHANGE" => {
            let shape = Single::new(amount(550_000, 800_000, rng), "DENOMINATION_EXCHANGE", "Cash")
                .purpose("Denomination exchange - small to large bills");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Denomination exchange of BDT {} exceeds BDT 500,000 threshold.",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "ATM_CASH_EVASION" => {
            let shape = Single::new(amount(350_000, 500_000, rng), "ATM_DEPOSIT", "ATM").purpose("ATM Cash Deposit");
            let records = single(a, shape, rng);
            let explanation = format!(
                "ATM cash deposit of BDT {} exceeds BDT 300,000, possible staff avoidance.",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "STRUCTURING" => {
            let records = structuring(a, 3, (900_001, 989_999), 36.0, rng);
            let explanation = format!(
                "{} cash deposits each BDT 900K-990K (just below 1M CTR) within 48h. Total: BDT {}.",
                records.len(),
                thousands(total(&records))
            );
            Built::new(records, explanation)
        }
        "AGGREGATE_STRUCTURING" => {
            let records = structuring(a, 5, (210_000, 350_000), 40.0, rng);
            let explanation = format!(
                "{} small deposits aggregating BDT {} (exceeds BDT 1M) within 48h.",
                records.len(),
                thousands(total(&records))
            );
            Built::new(records, explanation)
        }
        "MULTI_ACCOUNT_STRUCTURING" => {
            let pooled: Vec<&str> = a.pool.accounts().collect();
            let accounts: Vec<String> = if pooled.len() >= 2 {
                pick_n(&pooled, 2, rng).into_iter().map(String::from).collect()
            } else {
                vec![a.account.clone(), account_number(rng)]
            };
            let receiver = a.customer_name(rng);
            let records: Vec<Value> = accounts
                .iter()
                .map(|account| {
                    let overrides = json!({
                        "amount": amount(550_000, 700_000, rng),
                        "type": "WIRE_TRANSFER",
                        "direction": "OUT",
                        "paymentMethod": "Wire Transfer",
                        "timestamp": hours_ago(a.now, 1.0, 24.0, rng),
                        "receiver": receiver,
                        "receiverAccount": a.account,
                    });
                    txn(a, account, overrides, rng)
                })
                .collect();
            let explanation = format!(
                "Transfers from {} different accounts to same beneficiary totaling BDT {}.",
                accounts.len(),
                thousands(total(&records))
            );
            Built::new(records, explanation)
        }
        "COORDINATED_STRUCTURING" => {
            let pooled: Vec<&CustomerPoolEntry> = a.pool.customers().collect();
            let depositors = pick_n(&pooled, 3, rng);
            // Shares of BDT 550,000 keep the branch total above 500,000.
            let floor = 550_000 / depositors.len().max(1) as i64;
            let records: Vec<Value> = depositors
                .iter()
                .map(|depositor| {
                    let sender = match &depositor.customer_name_eng {
                        Some(name) => name.clone(),
                        None => random_name(rng),
                    };
                    let overrides = json!({
                        "amount": amount(floor, floor + 100_000, rng),
                        "type": "CASH_DEPOSIT",
                        "direction": "IN",
                        "paymentMethod": "Cash",
                        "timestamp": hours_ago(a.now, 0.0, 1.5, rng),
                        "sender": sender,
                    });
                    base::transaction(depositor.customer_id, &a.account, a.now, overrides, rng)
                })
                .collect();
            let explanation = format!(
                "{} customers depositing cash at same branch within 2 hours. Total: BDT {}.",
                depositors.len(),
                thousands(total(&records))
            );
            let built = Built::new(records, explanation);
            if depositors.len() < 2 {
                built.requiring("PREREQUISITE: Requires at least 2 customers in the pool. Generate more customers first.")
            } else {
                built
            }
        }
        "VELOCITY_COUNT" => {
            let records = velocity(a, 25, rng);
            Built::new(
                records,
                format!("25 transactions within 24 hours (threshold: 20) for customer {customer}."),
            )
        }
        "RAPID_IN_OUT" => {
            let records = rapid_in_out(a, amount(1_200_000, 2_000_000, rng), rng);
            let explanation = format!(
                "BDT {} credit followed by BDT {} debit ({}%) within 24h.",
                thousands(amount_of(&records[0])),
                thousands(amount_of(&records[1])),
                ratio_percent(&records)
            );
            Built::new(records, explanation)
        }
        "SUDDEN_VOLUME_INCREASE" => {
            let records = cumulative(a, amount(5_000_000, 10_000_000, rng), 15, 120.0, rng);
            let explanation = format!(
                "15 transactions totaling BDT {}, designed to create a 300%+ spike over the prior week.",
                thousands(total(&records))
            );
            Built::new(records, explanation).requiring(
                "Ensure prior week has minimal activity for this customer to trigger the 300% spike.",
            )
        }
        "WIRE_VELOCITY" => {
            let beneficiaries = pick_n(BD_NAMES, 3, rng);
            let records = (0..7)
                .map(|idx| {
                    let overrides = json!({
                        "amount": amount(200_000, 800_000, rng),
                        "type": "WIRE_TRANSFER",
                        "direction": "OUT",
                        "paymentMethod": "Wire Transfer",
                        "timestamp": slot_ago(a.now, idx, 7, 21.0, rng),
                        "receiver": beneficiaries[idx % beneficiaries.len()],
                        "receiverAccount": account_number(rng),
                    });
                    txn(a, &a.account, overrides, rng)
                })
                .collect();
            Built::new(
                records,
                "7 wire transfers to 3 different beneficiaries within 24h (threshold: >5 wires, >2 beneficiaries).",
            )
        }
        "SINGLE_AMOUNT" => {
            let shape = Single::new(amount(5_500_000, 8_000_000, rng), "WIRE_TRANSFER", "Wire Transfer");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Single transaction of BDT {} exceeds BDT 5,000,000 threshold.",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "CUMULATIVE_DAILY" => {
            let records = cumulative(a, amount(11_000_000, 15_000_000, rng), 6, 20.0, rng);
            let explanation = format!(
                "6 transactions totaling BDT {} in 24h (threshold: BDT 10,000,000).",
                thousands(total(&records))
            );
            Built::new(records, explanation)
        }
        "CUMULATIVE_WEEKLY" => {
            let records = cumulative(a, amount(26_000_000, 35_000_000, rng), 12, 150.0, rng);
            let explanation = format!(
                "12 transactions totaling BDT {} in 7 days (threshold: BDT 25,000,000).",
                thousands(total(&records))
            );
            Built::new(records, explanation)
        }
        "CASH_INSTRUMENT_CONVERSION" => {
            let cash = amount(500_000, 800_000, rng);
            let mut records: Vec<Value> = (0..3)
                .map(|_| {
                    let overrides = json!({
                        "amount": (cash as f64 / 3.0).round() as i64,
                        "type": "CASH_DEPOSIT",
                        "direction": "IN",
                        "paymentMethod": "Cash",
                        "timestamp": hours_ago(a.now, 48.0, 120.0, rng),
                    });
                    txn(a, &a.account, overrides, rng)
                })
                .collect();
            let overrides = json!({
                "amount": (cash as f64 * 0.9).round() as i64,
                "type": "PAY_ORDER",
                "direction": "OUT",
                "paymentMethod": "Pay Order",
                "timestamp": hours_ago(a.now, 1.0, 24.0, rng),
                "purpose": "Purchase of pay order",
            });
            records.push(txn(a, &a.account, overrides, rng));
            let explanation = format!(
                "Cash deposits of ~BDT {} followed by pay order purchase of 90% within 168h.",
                thousands(cash)
            );
            Built::new(records, explanation)
        }
        "KYC_MISMATCH" => {
            let records = cumulative(a, amount(6_000_000, 10_000_000, rng), 8, 600.0, rng);
            let explanation = format!(
                "BDT {} in 30 days; the rule checks whether this exceeds 200% of the customer's declared profile.",
                thousands(total(&records))
            );
            Built::new(records, explanation).requiring(
                "This rule depends on the customer's declared income/profile already existing in the system.",
            )
        }
        "NON_EARNING_ACTIVITY" => {
            let records = cumulative(a, amount(600_000, 1_000_000, rng), 4, 500.0, rng);
            let explanation = format!(
                "BDT {} in 30 days for customer {customer}.",
                thousands(total(&records))
            );
            Built::new(records, explanation).requiring(
                "PREREQUISITE: Customer must have a non-earning occupation (Housewife, Student, Unemployed, Retired) in their profile.",
            )
        }
        "SUDDEN_LOAN_PAYOFF" => {
            let shape = Single::new(amount(1_200_000, 2_000_000, rng), "LOAN_PAYMENT", "Cash").purpose("Loan repayment");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Sudden loan payment of BDT {} (threshold: BDT 1,000,000 in 72h).",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "THIRD_PARTY_UNEXPLAINED" => {
            let overrides = json!({
                "amount": amount(600_000, 1_000_000, rng),
                "type": "WIRE_TRANSFER",
                "direction": "IN",
                "paymentMethod": "Wire Transfer",
                "timestamp": hours_ago(a.now, 2.0, 12.0, rng),
                "sender": random_name(rng),
                "purpose": "",
            });
            let records = vec![txn(a, &a.account, overrides, rng)];
            let explanation = format!(
                "Third-party credit of BDT {} with no stated purpose.",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "DOCUMENT_RELUCTANCE" => {
            let records = cumulative(a, amount(150_000, 300_000, rng), 3, 500.0, rng);
            let explanation = format!(
                "Transactions totaling BDT {} for customer with incomplete KYC.",
                thousands(total(&records))
            );
            Built::new(records, explanation).requiring(
                "PREREQUISITE: Customer must have KYC status = INCOMPLETE/PENDING/REJECTED in the system.",
            )
        }
        "SHELL_COMPANY" => {
            let records = cumulative(a, amount(12_000_000, 20_000_000, rng), 5, 200.0, rng);
            let explanation = format!(
                "BDT {} volume in only {} active days within 90 days.",
                thousands(total(&records)),
                records.len()
            );
            Built::new(records, explanation)
                .requiring("PREREQUISITE: Customer must be a CORPORATE type with high-risk rating.")
        }
        "HIGH_RISK_COUNTRY" => {
            let records = geographic(a, FATF_BLACKLIST, Abroad::amount(amount(100_000, 1_000_000, rng)), rng);
            let explanation = format!(
                "Transfer to FATF blacklist country {} (amount: BDT {}).",
                text_of(&records[0], "receiverCountry"),
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "TAX_HAVEN" => {
            let records = geographic(a, TAX_HAVENS, Abroad::amount(amount(500_000, 3_000_000, rng)), rng);
            let explanation = format!(
                "Transfer to tax haven {} (amount: BDT {}).",
                text_of(&records[0], "receiverCountry"),
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "LANDLOCKED_ANOMALY" => {
            let abroad = Abroad::amount(amount(200_000, 800_000, rng)).purpose("Shipping payment for goods transport");
            let records = geographic(a, LANDLOCKED, abroad, rng);
            let explanation = format!(
                "Shipping-related payment to landlocked country {}; maritime shipping is implausible.",
                text_of(&records[0], "receiverCountry")
            );
            Built::new(records, explanation)
        }
        "CROSS_BORDER_SUSPICIOUS" => {
            let records = multi_country(a, &["AE", "SG", "HK", "MY", "TH"], 4, "WIRE_TRANSFER", rng);
            let explanation = format!(
                "Cross-border transfers to {} different countries within 24h (threshold: >=3 countries).",
                records.len()
            );
            Built::new(records, explanation)
        }
        "PEP_MONITORING" => {
            let shape = Single::new(amount(150_000, 500_000, rng), "WIRE_TRANSFER", "Wire Transfer");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Transaction of BDT {} (PEP threshold: BDT 100,000).",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation).requiring("PREREQUISITE: Customer must be flagged as PEP in the system.")
        }
        "PEP_LIFESTYLE" => {
            let mut records = cumulative(a, amount(6_000_000, 10_000_000, rng), 8, 600.0, rng);
            for record in &mut records {
                record["direction"] = json!("OUT");
            }
            let explanation = format!(
                "BDT {} outgoing spending in 30 days for PEP customer.",
                thousands(total(&records))
            );
            Built::new(records, explanation).requiring("PREREQUISITE: Customer must be flagged as PEP.")
        }
        "PEP_ASSOCIATE" => {
            let shape = Single::new(amount(500_000, 2_000_000, rng), "WIRE_TRANSFER", "Wire Transfer");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Transfer of BDT {}; the rule requires a customer relationship graph linking to a PEP.",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
                .requiring("This rule depends on the customer relationship graph in the system.")
        }
        "HIGH_RISK_CUSTOMER" => {
            let shape = Single::new(amount(300_000, 600_000, rng), "WIRE_TRANSFER", "Wire Transfer");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Transaction of BDT {} (high-risk threshold: BDT 250,000 = 50% of normal BDT 500,000).",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
                .requiring("PREREQUISITE: Customer must have HIGH/VERY_HIGH/CRITICAL risk rating.")
        }
        "DORMANT_ACTIVATION" => {
            let records = single(a, Single::new(amount(150_000, 500_000, rng), "CASH_DEPOSIT", "Cash"), rng);
            let explanation = format!("Deposit of BDT {} on account.", thousands(amount_of(&records[0])));
            Built::new(records, explanation).requiring(
                "PREREQUISITE: The account must have been dormant (no activity) for >=180 days in the system.",
            )
        }
        "NEW_ACCOUNT_ACTIVITY" => {
            let records = cumulative(a, amount(600_000, 1_200_000, rng), 4, 48.0, rng);
            let explanation = format!("BDT {} activity on new account.", thousands(total(&records)));
            Built::new(records, explanation).requiring("PREREQUISITE: Account must be <=30 days old in the system.")
        }
        "FUNNEL_ACCOUNT" => {
            let records = funnel(a, rng);
            let explanation = format!(
                "{} inbound transfers from different senders consolidated into 1 large outbound (funnel pattern).",
                records.len() - 1
            );
            Built::new(records, explanation)
        }
        "FLOW_THROUGH" => {
            let records = flow_through(a, rng);
            let explanation = format!(
                "{} transactions with near-balanced in/out flow (flow-through account pattern).",
                records.len()
            );
            Built::new(records, explanation)
        }
        "SAFE_DEPOSIT_SURGE" => {
            let records = (0..4)
                .map(|idx| {
                    let overrides = json!({
                        "amount": 0,
                        "type": "SAFE_DEPOSIT",
                        "direction": "IN",
                        "paymentMethod": "Other",
                        "timestamp": slot_ago(a.now, idx, 4, 96.0, rng),
                        "purpose": "Safe deposit box access",
                    });
                    txn(a, &a.account, overrides, rng)
                })
                .collect();
            Built::new(
                records,
                "4 safe deposit box accesses in 7 days (threshold: >=3 accesses per 168h).",
            )
        }
        "REMITTANCE_ANOMALY" => {
            let records = multi_country(a, &["AE", "MY", "SG", "SA", "QA"], 4, "REMITTANCE", rng);
            let explanation = format!(
                "Outbound remittances to {} different countries within 168h (threshold: >=3).",
                records.len()
            );
            Built::new(records, explanation)
        }
        "SMALL_DEPOSIT_LARGE_WIRE" => {
            let records = small_deposits_large_wire(a, rng);
            let (deposits, wire) = records.split_at(records.len() - 1);
            let explanation = format!(
                "{} small cash deposits totaling BDT {} followed by 1 international wire of BDT {}. TF indicator.",
                deposits.len(),
                thousands(total(deposits)),
                thousands(amount_of(&wire[0]))
            );
            Built::new(records, explanation)
        }
        "CORRESPONDENT_ANOMALY" => {
            let shape = Single::new(amount(55_000_000, 80_000_000, rng), "NOSTRO", "Nostro Transfer")
                .purpose("Nostro account settlement");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Correspondent banking transfer of BDT {} (threshold: BDT 50,000,000).",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "ROUND_TRIP" => Built::new(
            round_trip(a, rng),
            "Circular fund flow: 2 round-trips with same counterparty at +/-5% amounts within 30 days.",
        ),
        "SAME_DAY_IN_OUT" => {
            let records = rapid_in_out(a, amount(600_000, 1_000_000, rng), rng);
            let explanation = format!(
                "Same-day in BDT {} / out BDT {} ({}% matching).",
                thousands(amount_of(&records[0])),
                thousands(amount_of(&records[1])),
                ratio_percent(&records)
            );
            Built::new(records, explanation)
        }
        "COMPLEX_CHAIN" => {
            let records = complex_chain(a, rng);
            let mut countries: Vec<&str> = records
                .iter()
                .flat_map(|r| [text_of(r, "senderCountry"), text_of(r, "receiverCountry")])
                .collect();
            countries.sort_unstable();
            countries.dedup();
            let explanation = format!(
                "{}-hop transfer chain across {} countries.",
                records.len(),
                countries.len()
            );
            Built::new(records, explanation)
        }
        "AUTO_CTR" => {
            let records = single(a, Single::new(amount(1_100_000, 2_000_000, rng), "CASH_DEPOSIT", "Cash"), rng);
            let explanation = format!(
                "Cash transaction of BDT {} triggers automatic CTR filing.",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
        }
        "STR_COMPOSITE" => {
            let mut records = geographic(a, FATF_BLACKLIST, Abroad::amount(amount(2_000_000, 3_000_000, rng)), rng);
            for _ in 0..8 {
                let overrides = json!({
                    "amount": amount(100_000, 500_000, rng),
                    "type": "CASH_DEPOSIT",
                    "paymentMethod": "Cash",
                    "timestamp": hours_ago(a.now, 0.0, 600.0, rng),
                });
                records.push(txn(a, &a.account, overrides, rng));
            }
            records.extend(multi_country(a, &["AE", "SG", "HK", "MY", "TR", "KE"], 6, "WIRE_TRANSFER", rng));
            let explanation = format!(
                "Composite STR indicators: high-risk country txns, 80%+ cash ratio, 6+ countries, high volume. {} total transactions.",
                records.len()
            );
            Built::new(records, explanation)
        }
        "NGO_MISUSE" => {
            let mut records: Vec<Value> = (0..3)
                .map(|_| {
                    let overrides = json!({
                        "amount": amount(300_000, 500_000, rng),
                        "type": "Payment",
                        "direction": "OUT",
                        "paymentMethod": "Wire Transfer",
                        "timestamp": hours_ago(a.now, 0.0, 600.0, rng),
                        "purpose": "Luxury vehicle purchase",
                    });
                    txn(a, &a.account, overrides, rng)
                })
                .collect();
            let overrides = json!({
                "amount": amount(100_000, 200_000, rng),
                "type": "Payment",
                "direction": "OUT",
                "paymentMethod": "Transfer",
                "timestamp": hours_ago(a.now, 0.0, 600.0, rng),
                "purpose": "Program operational expenses",
            });
            records.push(txn(a, &a.account, overrides, rng));
            Built::new(
                records,
                "NGO spending: 75%+ on non-operational items (vehicles, travel) vs 25% on operations.",
            )
            .requiring("PREREQUISITE: Customer must be an NGO/NPO type entity in the system.")
        }
        "ADVERSE_MEDIA_TXN" => {
            let shape = Single::new(amount(300_000, 600_000, rng), "WIRE_TRANSFER", "Wire Transfer");
            let records = single(a, shape, rng);
            let explanation = format!(
                "Transaction of BDT {} for customer with adverse media flag (threshold: BDT 250,000).",
                thousands(amount_of(&records[0]))
            );
            Built::new(records, explanation)
                .requiring("PREREQUISITE: Customer must have adverse_media_flag = true in the system.")
        }
        "SWIFT_SANCTION_RT" => {
            let records = swift(a, SANCTIONED_COUNTRIES, 1, rng);
            let explanation = format!(
                "SWIFT transfer to sanctioned country {}. Action: FREEZE.",
                text_of(&records[0], "receiverCountry")
            );
            Built::new(records, explanation)
        }
        "SANCTIONED_COUNTRY_PAYMENT" => {
            let records = geographic(a, SANCTIONED_COUNTRIES, Abroad::amount(amount(100_000, 1_000_000, rng)), rng);
            let explanation = format!(
                "Payment to sanctioned country {}. Action: block_and_report.",
                text_of(&records[0], "receiverCountry")
            );
            Built::new(records, explanation)
        }
        "SWIFT_PATTERN_ANOMALY" => {
            let countries = pick_n(&["AE", "SG", "HK", "GB", "DE", "JP", "AU", "CA"], 6, rng);
            let records = (0..12)
                .map(|idx| {
                    let overrides = json!({
                        "amount": amount(200_000, 1_000_000, rng),
                        "type": "SWIFT",
                        "direction": "OUT",
                        "paymentMethod": "SWIFT",
                        "senderCountry": "BD",
                        "receiverCountry": countries[idx % countries.len()],
                        "timestamp": slot_ago(a.now, idx, 12, 144.0, rng),
                    });
                    txn(a, &a.account, overrides, rng)
                })
                .collect();
            Built::new(
                records,
                "12 SWIFT transfers to 6 different countries within 168h (threshold: >=10 SWIFT, >=5 countries).",
            )
        }
        _ => return None,
    };
    Some(built)
}

fn txn(a: &Actors<'_>, account: &str, overrides: Value, rng: &mut dyn RngCore) -> Value {
    base::transaction(a.customer.customer_id, account, a.now, overrides, rng)
}

/// One transaction from the customer, stamped one to six hours ago.
struct Single {
    amount: i64,
    kind: &'static str,
    method: &'static str,
    purpose: Option<&'static str>,
}

impl Single {
    fn new(amount: i64, kind: &'static str, method: &'static str) -> Self {
        Self {
            amount,
            kind,
            method,
            purpose: None,
        }
    }

    fn purpose(mut self, purpose: &'static str) -> Self {
        self.purpose = Some(purpose);
        self
    }
}

fn single(a: &Actors<'_>, shape: Single, rng: &mut dyn RngCore) -> Vec<Value> {
    let overrides = json!({
        "amount": shape.amount,
        "type": shape.kind,
        "direction": "IN",
        "paymentMethod": shape.method,
        "timestamp": hours_ago(a.now, 1.0, 6.0, rng),
        "purpose": shape.purpose.unwrap_or_else(|| pick(PURPOSES, rng)),
        "senderCountry": "BD",
        "receiverCountry": "BD",
        "sender": a.customer_name(rng),
        "receiver": random_name(rng),
    });
    vec![txn(a, &a.account, overrides, rng)]
}

/// `count` cash deposits in `range`, one per equal slice of `span_hours`.
fn structuring(
    a: &Actors<'_>,
    count: usize,
    range: (i64, i64),
    span_hours: f64,
    rng: &mut dyn RngCore,
) -> Vec<Value> {
    (0..count)
        .map(|idx| {
            let name = a.customer_name(rng);
            let overrides = json!({
                "amount": amount(range.0, range.1, rng),
                "type": "CASH_DEPOSIT",
                "direction": "IN",
                "paymentMethod": "Cash",
                "timestamp": slot_ago(a.now, idx, count, span_hours, rng),
                "sender": name,
                "receiver": name,
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect()
}

fn velocity(a: &Actors<'_>, count: usize, rng: &mut dyn RngCore) -> Vec<Value> {
    (0..count)
        .map(|_| {
            let overrides = json!({
                "amount": amount(5_000, 80_000, rng),
                "type": pick(&["CASH_DEPOSIT", "CASH_WITHDRAWAL", "WIRE_TRANSFER"], rng),
                "direction": pick(&["IN", "OUT"], rng),
                "paymentMethod": pick(&["Cash", "Wire Transfer", "Online"], rng),
                "timestamp": hours_ago(a.now, 0.0, 20.0, rng),
                "sender": a.customer_name(rng),
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect()
}

/// Inbound wire followed by an outbound wire of 91-96% of it.
fn rapid_in_out(a: &Actors<'_>, inbound: i64, rng: &mut dyn RngCore) -> Vec<Value> {
    let outbound = scaled(inbound, 0.91, 0.96, rng);
    let credit = json!({
        "amount": inbound,
        "type": "WIRE_TRANSFER",
        "direction": "IN",
        "paymentMethod": "Wire Transfer",
        "timestamp": hours_ago(a.now, 8.0, 16.0, rng),
        "sender": random_name(rng),
        "receiver": a.customer_name(rng),
    });
    let debit = json!({
        "amount": outbound,
        "type": "WIRE_TRANSFER",
        "direction": "OUT",
        "paymentMethod": "Wire Transfer",
        "timestamp": hours_ago(a.now, 1.0, 6.0, rng),
        "sender": a.customer_name(rng),
        "receiver": random_name(rng),
    });
    vec![txn(a, &a.account, credit, rng), txn(a, &a.account, debit, rng)]
}

fn ratio_percent(records: &[Value]) -> i64 {
    let inbound = amount_of(&records[0]).max(1);
    (amount_of(&records[1]) as f64 / inbound as f64 * 100.0).round() as i64
}

/// Outbound transfer to one of `countries`.
struct Abroad {
    amount: i64,
    purpose: &'static str,
}

impl Abroad {
    fn amount(amount: i64) -> Self {
        Self {
            amount,
            purpose: "International Transfer",
        }
    }

    fn purpose(mut self, purpose: &'static str) -> Self {
        self.purpose = purpose;
        self
    }
}

fn geographic(
    a: &Actors<'_>,
    countries: &[&'static str],
    abroad: Abroad,
    rng: &mut dyn RngCore,
) -> Vec<Value> {
    let overrides = json!({
        "amount": abroad.amount,
        "type": "WIRE_TRANSFER",
        "direction": "OUT",
        "paymentMethod": "Wire Transfer",
        "senderCountry": "BD",
        "receiverCountry": pick(countries, rng),
        "purpose": abroad.purpose,
        "timestamp": hours_ago(a.now, 1.0, 12.0, rng),
    });
    vec![txn(a, &a.account, overrides, rng)]
}

/// One outbound transfer to each of `count` distinct countries.
fn multi_country(
    a: &Actors<'_>,
    countries: &[&'static str],
    count: usize,
    kind: &str,
    rng: &mut dyn RngCore,
) -> Vec<Value> {
    pick_n(countries, count, rng)
        .into_iter()
        .map(|country| {
            let overrides = json!({
                "amount": amount(200_000, 2_000_000, rng),
                "type": kind,
                "direction": "OUT",
                "paymentMethod": "Wire Transfer",
                "senderCountry": "BD",
                "receiverCountry": country,
                "purpose": "International Transfer",
                "timestamp": hours_ago(a.now, 0.0, 24.0, rng),
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect()
}

/// `count` mixed transactions summing to exactly `target`.
fn cumulative(
    a: &Actors<'_>,
    target: i64,
    count: usize,
    span_hours: f64,
    rng: &mut dyn RngCore,
) -> Vec<Value> {
    let per_txn = (target as f64 / count as f64).round() as i64 + amount(-10_000, 10_000, rng);
    (0..count)
        .map(|idx| {
            let value = if idx + 1 == count {
                target - per_txn * (count as i64 - 1)
            } else {
                per_txn
            };
            let overrides = json!({
                "amount": value,
                "type": pick(&["CASH_DEPOSIT", "WIRE_TRANSFER", "CASH_WITHDRAWAL"], rng),
                "direction": "IN",
                "paymentMethod": pick(&["Cash", "Wire Transfer", "Transfer"], rng),
                "timestamp": slot_ago(a.now, idx, count, span_hours, rng),
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect()
}

/// Six inbound wires from distinct senders, then one outbound of 85% of their sum.
fn funnel(a: &Actors<'_>, rng: &mut dyn RngCore) -> Vec<Value> {
    let mut records: Vec<Value> = (0..6)
        .map(|idx| {
            let start = 24.0 + idx as f64 * 12.0;
            let overrides = json!({
                "amount": amount(80_000, 180_000, rng),
                "type": "WIRE_TRANSFER",
                "direction": "IN",
                "paymentMethod": "Wire Transfer",
                "timestamp": hours_ago(a.now, start, start + 12.0, rng),
                "sender": random_name(rng),
                "senderAccount": account_number(rng),
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect();
    let inbound = total(&records);
    let overrides = json!({
        "amount": (inbound as f64 * 0.85).round() as i64,
        "type": "WIRE_TRANSFER",
        "direction": "OUT",
        "paymentMethod": "Wire Transfer",
        "timestamp": hours_ago(a.now, 1.0, 6.0, rng),
        "receiver": random_name(rng),
        "receiverCountry": pick(&["AE", "SG", "HK"], rng),
    });
    records.push(txn(a, &a.account, overrides, rng));
    records
}

/// Twenty-five daily wires, then a balancing debit when outflow lags inflow by more than 10%.
fn flow_through(a: &Actors<'_>, rng: &mut dyn RngCore) -> Vec<Value> {
    let mut records = Vec::with_capacity(26);
    let (mut inbound, mut outbound) = (0_i64, 0_i64);
    for idx in 0..25 {
        let value = amount(40_000, 120_000, rng);
        let credit = inbound <= outbound || rng.random_bool(0.5);
        if credit {
            inbound += value;
        } else {
            outbound += value;
        }
        let overrides = json!({
            "amount": value,
            "type": "WIRE_TRANSFER",
            "direction": if credit { "IN" } else { "OUT" },
            "paymentMethod": "Wire Transfer",
            "timestamp": slot_ago(a.now, idx, 25, 600.0, rng),
        });
        records.push(txn(a, &a.account, overrides, rng));
    }
    if (outbound as f64) < inbound as f64 * 0.9 {
        let overrides = json!({
            "amount": inbound - outbound - amount(1_000, 10_000, rng),
            "type": "WIRE_TRANSFER",
            "direction": "OUT",
            "paymentMethod": "Wire Transfer",
            "timestamp": hours_ago(a.now, 0.0, 12.0, rng),
        });
        records.push(txn(a, &a.account, overrides, rng));
    }
    records
}

/// Out, back, out, back with one counterparty over three weeks.
fn round_trip(a: &Actors<'_>, rng: &mut dyn RngCore) -> Vec<Value> {
    let counterparty = random_name(rng);
    let counter_account = account_number(rng);
    let first = amount(500_000, 2_000_000, rng);
    let legs = [
        ("OUT", first, 480.0, 600.0),
        ("IN", scaled(first, 0.96, 1.04, rng), 360.0, 480.0),
        ("OUT", scaled(first, 0.97, 1.03, rng), 200.0, 300.0),
        ("IN", scaled(first, 0.95, 1.05, rng), 50.0, 150.0),
    ];
    legs.into_iter()
        .map(|(direction, value, from, to)| {
            let mut overrides = json!({
                "amount": value,
                "type": "WIRE_TRANSFER",
                "direction": direction,
                "paymentMethod": "Wire Transfer",
                "timestamp": hours_ago(a.now, from, to, rng),
            });
            let (party, account) = if direction == "OUT" {
                ("receiver", "receiverAccount")
            } else {
                ("sender", "senderAccount")
            };
            overrides[party] = json!(counterparty);
            overrides[account] = json!(counter_account);
            txn(a, &a.account, overrides, rng)
        })
        .collect()
}

fn small_deposits_large_wire(a: &Actors<'_>, rng: &mut dyn RngCore) -> Vec<Value> {
    let mut records: Vec<Value> = (0..6)
        .map(|idx| {
            let start = 24.0 + idx as f64 * 18.0;
            let overrides = json!({
                "amount": amount(80_000, 190_000, rng),
                "type": "CASH_DEPOSIT",
                "direction": "IN",
                "paymentMethod": "Cash",
                "timestamp": hours_ago(a.now, start, start + 12.0, rng),
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect();
    let deposits = total(&records);
    let overrides = json!({
        "amount": (deposits as f64 * 0.85).round() as i64,
        "type": "WIRE_TRANSFER",
        "direction": "OUT",
        "paymentMethod": "Wire Transfer",
        "timestamp": hours_ago(a.now, 1.0, 12.0, rng),
        "receiverCountry": pick(&["AE", "MY", "SG"], rng),
        "purpose": "Family remittance",
    });
    records.push(txn(a, &a.account, overrides, rng));
    records
}

/// Three hops BD -> AE -> SG -> HK, each 92-108% of a common amount.
fn complex_chain(a: &Actors<'_>, rng: &mut dyn RngCore) -> Vec<Value> {
    const COUNTRIES: [&str; 4] = ["BD", "AE", "SG", "HK"];
    let parties = [a.customer_name(rng), random_name(rng), random_name(rng), random_name(rng)];
    let base_amount = amount(1_000_000, 3_000_000, rng);
    (0..COUNTRIES.len() - 1)
        .map(|idx| {
            let overrides = json!({
                "amount": scaled(base_amount, 0.92, 1.08, rng),
                "type": "WIRE_TRANSFER",
                "direction": if idx == 0 { "OUT" } else { "IN" },
                "paymentMethod": "Wire Transfer",
                "timestamp": hours_ago(a.now, idx as f64 * 72.0, (idx + 1) as f64 * 72.0, rng),
                "sender": parties[idx],
                "receiver": parties[idx + 1],
                "senderCountry": COUNTRIES[idx],
                "receiverCountry": COUNTRIES[idx + 1],
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect()
}

fn swift(a: &Actors<'_>, countries: &[&'static str], count: usize, rng: &mut dyn RngCore) -> Vec<Value> {
    (0..count)
        .map(|_| {
            let overrides = json!({
                "amount": amount(500_000, 5_000_000, rng),
                "type": "SWIFT",
                "direction": "OUT",
                "paymentMethod": "SWIFT",
                "senderCountry": "BD",
                "receiverCountry": pick(countries, rng),
                "timestamp": hours_ago(a.now, 0.0, 12.0, rng),
                "purpose": "SWIFT Transfer",
            });
            txn(a, &a.account, overrides, rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlsynth_generate::IdentityPool;
    use chrono::{DateTime, TimeZone, Utc};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("now")
    }

    #[test]
    fn cumulative_hits_the_target_exactly() {
        let pool = IdentityPool::in_memory();
        let customer = CustomerPoolEntry::new(500_123);
        let actors = Actors { customer: &customer, account: "1001".into(), pool: &pool, now: now() };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let records = cumulative(&actors, 12_345_678, 6, 20.0, &mut rng);
        assert_eq!(records.len(), 6);
        assert_eq!(total(&records), 12_345_678);
    }

    #[test]
    fn funnel_outflow_is_85_percent_of_inflow() {
        let pool = IdentityPool::in_memory();
        let customer = CustomerPoolEntry::new(1);
        let actors = Actors { customer: &customer, account: "1001".into(), pool: &pool, now: now() };
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let records = funnel(&actors, &mut rng);
        let (inbound, outbound) = records.split_at(6);
        let expected = (total(inbound) as f64 * 0.85).round() as i64;
        assert_eq!(amount_of(&outbound[0]), expected);
        assert_eq!(outbound[0]["direction"], "OUT");
    }

    #[test]
    fn flow_through_balances_within_ten_percent() {
        let pool = IdentityPool::in_memory();
        let customer = CustomerPoolEntry::new(1);
        let actors = Actors { customer: &customer, account: "1001".into(), pool: &pool, now: now() };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let records = flow_through(&actors, &mut rng);
        let sum = |dir: &str| -> i64 {
            records.iter().filter(|r| r["direction"] == dir).map(amount_of).sum()
        };
        assert!(records.len() >= 25);
        assert!(sum("OUT") as f64 >= sum("IN") as f64 * 0.9 - 10_000.0);
    }

    #[test]
    fn unknown_codes_belong_to_other_families() {
        let pool = IdentityPool::in_memory();
        let customer = CustomerPoolEntry::new(1);
        let actors = Actors { customer: &customer, account: "1001".into(), pool: &pool, now: now() };
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        assert!(build("TBML-001", &actors, &mut rng).is_none());
    }
}
