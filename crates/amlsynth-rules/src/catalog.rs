//! Static catalog of the monitoring rules a scenario can be composed for.

use std::fmt;

use amlsynth_core::DataType;
use serde::Serialize;

use crate::errors::{Result, ViolationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Transaction,
    Sanction,
    Trade,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 3] = [
        RuleCategory::Transaction,
        RuleCategory::Sanction,
        RuleCategory::Trade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCategory::Transaction => "transaction",
            RuleCategory::Sanction => "sanction",
            RuleCategory::Trade => "trade",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Root data type of the records a rule in this category produces.
    pub const fn data_type(self) -> DataType {
        match self {
            RuleCategory::Transaction => DataType::Transaction,
            RuleCategory::Sanction => DataType::Sanction,
            RuleCategory::Trade => DataType::Trade,
        }
    }

    fn group_name(self) -> &'static str {
        match self {
            RuleCategory::Transaction => "Transaction Monitoring",
            RuleCategory::Sanction => "Sanction Screening",
            RuleCategory::Trade => "Trade-Based ML (TBML)",
        }
    }

    fn group_description(self, count: usize) -> String {
        match self {
            RuleCategory::Transaction => format!("{count} rules monitoring transaction patterns"),
            RuleCategory::Sanction => format!("{count} rule types for sanction/PEP screening"),
            RuleCategory::Trade => format!("{count} rules for trade/LC monitoring"),
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One monitoring rule. `risk_score` and `threshold` are display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub code: &'static str,
    pub name: &'static str,
    pub category: RuleCategory,
    pub subcategory: &'static str,
    pub severity: Severity,
    pub risk_score: &'static str,
    pub threshold: &'static str,
    pub description: &'static str,
    pub data_type: DataType,
}

#[allow(clippy::too_many_arguments)]
const fn rule(
    code: &'static str,
    name: &'static str,
    category: RuleCategory,
    subcategory: &'static str,
    severity: Severity,
    risk_score: &'static str,
    threshold: &'static str,
    description: &'static str,
) -> Rule {
    Rule {
        code,
        name,
        category,
        subcategory,
        severity,
        risk_score,
        threshold,
        description,
        data_type: category.data_type(),
    }
}

#[rustfmt::skip]
static RULES: &[Rule] = &[
    rule("CASH_THRESHOLD", "CTR Threshold", RuleCategory::Transaction, "Cash Transaction", Severity::High, "80", "BDT 1,000,000 / 24h", "Cash transactions exceeding CTR reporting threshold (BDT 10 Lakh). Triggers mandatory CTR filing."),
    rule("CASH_DEPOSIT_ANOMALY", "Cash Deposit Profile Anomaly", RuleCategory::Transaction, "Cash Transaction", Severity::Medium, "65", "BDT 500,000; 200% of 90-day avg", "Single cash deposit significantly deviating from customer 90-day average pattern."),
    rule("CASH_VS_INSTRUMENT_RATIO", "Cash-Intensive Business Anomaly", RuleCategory::Transaction, "Cash Transaction", Severity::Medium, "55", "80% cash ratio / 30 days (min 5 txns)", "Customer where ≥80% of transactions are cash within 30 days."),
    rule("DENOMINATION_EXCHANGE", "Denomination Exchange", RuleCategory::Transaction, "Cash Transaction", Severity::Medium, "60", "BDT 500,000 / 24h", "Large low-to-high denomination exchanges or FX conversions."),
    rule("ATM_CASH_EVASION", "ATM Cash Deposit (Staff Avoidance)", RuleCategory::Transaction, "Cash Transaction", Severity::High, "70", "BDT 300,000 / 24h", "Large ATM cash deposits — possible avoidance of teller reporting."),
    rule("STRUCTURING", "Below-CTR Structuring", RuleCategory::Transaction, "Structuring", Severity::Critical, "85-95", "90% of BDT 1M, ≥2 txns / 48h", "Multiple transactions just below the CTR threshold to avoid reporting."),
    rule("AGGREGATE_STRUCTURING", "Multiple Credit Slips", RuleCategory::Transaction, "Structuring", Severity::High, "80", "BDT 1,000,000 cumulative, ≥3 deposits / 48h", "Multiple small deposits that aggregate above the CTR threshold."),
    rule("MULTI_ACCOUNT_STRUCTURING", "Multi-Account Structuring", RuleCategory::Transaction, "Structuring", Severity::Critical, "90", "BDT 1,000,000 from ≥2 accounts / 48h", "Same beneficiary receiving from multiple originating accounts above threshold."),
    rule("COORDINATED_STRUCTURING", "Same-Branch Coordinated", RuleCategory::Transaction, "Structuring", Severity::Critical, "90", "BDT 500,000, ≥2 customers, same branch / 2h", "Multiple customers depositing cash at the same branch within short window."),
    rule("VELOCITY_COUNT", "High Frequency Transactions", RuleCategory::Transaction, "Velocity", Severity::High, "70-90", ">20 txns / 24h", "Exceeding normal transaction count within 24 hours."),
    rule("RAPID_IN_OUT", "Rapid Fund Movement", RuleCategory::Transaction, "Velocity", Severity::Critical, "85", "BDT 1,000,000 in, ≥90% out / 24h", "Large credit immediately followed by near-equal debit. Classic layering indicator."),
    rule("SUDDEN_VOLUME_INCREASE", "Week-over-Week Volume Spike", RuleCategory::Transaction, "Velocity", Severity::High, "75", "300% increase vs prior week", "Transaction volume ≥300% of previous week."),
    rule("WIRE_VELOCITY", "Wire Transfer Velocity", RuleCategory::Transaction, "Velocity", Severity::High, "75", ">5 wires to >2 beneficiaries / 24h", "High-velocity outgoing wire transfers to many different recipients."),
    rule("SINGLE_AMOUNT", "Single Large Transaction", RuleCategory::Transaction, "Amount Threshold", Severity::Medium, "60", "BDT 5,000,000 / 24h", "Any single transaction exceeding BDT 5M threshold."),
    rule("CUMULATIVE_DAILY", "Cumulative Daily Threshold", RuleCategory::Transaction, "Amount Threshold", Severity::High, "70", "BDT 10,000,000 / 24h", "Daily aggregate transaction amount across all types exceeds threshold."),
    rule("CUMULATIVE_WEEKLY", "Cumulative Weekly Threshold", RuleCategory::Transaction, "Amount Threshold", Severity::Medium, "70", "BDT 25,000,000 / 168h", "Weekly aggregate transaction amount exceeds threshold."),
    rule("CASH_INSTRUMENT_CONVERSION", "Cash to Instrument Conversion", RuleCategory::Transaction, "Amount Threshold", Severity::High, "75", "BDT 500,000 / 168h", "Cash deposits followed by instrument purchases (pay orders, demand drafts). Instruments ≥80% of cash."),
    rule("KYC_MISMATCH", "KYC Profile Inconsistency", RuleCategory::Transaction, "Behavioral", Severity::High, "70", "BDT 5,000,000 / 30 days; 200% deviation", "Monthly volume inconsistent with declared customer profile."),
    rule("NON_EARNING_ACTIVITY", "Non-Earning Member Activity", RuleCategory::Transaction, "Behavioral", Severity::High, "75", "BDT 500,000 / 30 days", "Housewife, student, minor, unemployed, or retired person with significant transactions."),
    rule("SUDDEN_LOAN_PAYOFF", "Sudden Loan Payoff", RuleCategory::Transaction, "Behavioral", Severity::High, "65", "BDT 1,000,000 / 72h", "Large unexpected loan payments from unknown sources."),
    rule("THIRD_PARTY_UNEXPLAINED", "Third-Party w/o Explanation", RuleCategory::Transaction, "Behavioral", Severity::Medium, "55", "BDT 500,000 / 24h", "Inbound credits from third parties with no stated purpose."),
    rule("DOCUMENT_RELUCTANCE", "KYC Incomplete + Transacting", RuleCategory::Transaction, "Behavioral", Severity::Critical, "80", "BDT 100,000 / 30 days", "Customer with INCOMPLETE/PENDING/REJECTED KYC still transacting. Auto-STR flag."),
    rule("SHELL_COMPANY", "Shell Company Pattern", RuleCategory::Transaction, "Behavioral", Severity::Critical, "85", "BDT 10,000,000, ≤10 active days / 90 days", "High-risk corporate with high-volume low-activity-day pattern."),
    rule("HIGH_RISK_COUNTRY", "FATF High-Risk Jurisdiction", RuleCategory::Transaction, "Geographic Risk", Severity::High, "75", "Any amount / 24h", "Transaction involving FATF black/grey list countries."),
    rule("TAX_HAVEN", "Tax Haven Jurisdiction", RuleCategory::Transaction, "Geographic Risk", Severity::Medium, "55", "Any amount / 24h", "Transaction involving known tax haven jurisdictions."),
    rule("LANDLOCKED_ANOMALY", "Landlocked Country Shipping", RuleCategory::Transaction, "Geographic Risk", Severity::Medium, "55", "Any with \"ship\" in purpose / 168h", "Shipping-related transactions to landlocked countries where maritime shipping is implausible."),
    rule("CROSS_BORDER_SUSPICIOUS", "Suspicious Cross-Border", RuleCategory::Transaction, "Geographic Risk", Severity::High, "70", "≥3 countries OR ≥BDT 5M bidirectional / 24h", "Multiple cross-border transactions or high-value bidirectional international flows."),
    rule("PEP_MONITORING", "PEP Transaction Monitoring", RuleCategory::Transaction, "PEP & High-Risk", Severity::High, "75", "BDT 100,000 / 24h", "PEP or high-risk customer activity above lowered threshold. Triggers EDD."),
    rule("PEP_LIFESTYLE", "PEP Lifestyle Inconsistency", RuleCategory::Transaction, "PEP & High-Risk", Severity::Critical, "80", "BDT 5,000,000 outgoing / 30 days", "PEP with high monthly spending requiring source-of-wealth verification."),
    rule("PEP_ASSOCIATE", "PEP Associate Transactions", RuleCategory::Transaction, "PEP & High-Risk", Severity::High, "70", "Graph-based detection", "Transactions involving known associates of PEPs (requires customer relationship graph)."),
    rule("HIGH_RISK_CUSTOMER", "High-Risk Enhanced Monitoring", RuleCategory::Transaction, "PEP & High-Risk", Severity::High, "75", "BDT 250,000 / 24h (50% of normal)", "Lowered thresholds applied to HIGH/VERY_HIGH/CRITICAL risk customers."),
    rule("DORMANT_ACTIVATION", "Dormant Account Activation", RuleCategory::Transaction, "Account Activity", Severity::High, "70", "BDT 100,000 / 7 days; dormant ≥180 days", "Account with no activity for 180+ days suddenly transacting."),
    rule("NEW_ACCOUNT_ACTIVITY", "New Account High Activity", RuleCategory::Transaction, "Account Activity", Severity::Medium, "60", "BDT 500,000; account ≤30 days old", "Newly opened account with unusually high initial activity."),
    rule("FUNNEL_ACCOUNT", "Funnel Account Detection", RuleCategory::Transaction, "Account Activity", Severity::Critical, "90", "≥5 inbound sources; outbound ≥70% / 168h", "Multiple small inflows consolidated into single large outflow."),
    rule("FLOW_THROUGH", "Flow-Through Account", RuleCategory::Transaction, "Account Activity", Severity::High, "75", "≥BDT 1M in, ≥20 txns, in≈out (±10%) / 30 days", "High-volume near-zero-balance account — classic money laundering conduit."),
    rule("SAFE_DEPOSIT_SURGE", "Safe Deposit Box Surge", RuleCategory::Transaction, "Account Activity", Severity::Medium, "55", "≥3 accesses / 168h", "Unusual frequency of safe deposit box access."),
    rule("REMITTANCE_ANOMALY", "Unusual Remittance Pattern", RuleCategory::Transaction, "Cross-Border", Severity::Medium, "60", "≥3 countries OR BDT 2,000,000 / 168h", "Outbound remittances to many countries or in high volume."),
    rule("SMALL_DEPOSIT_LARGE_WIRE", "TF Indicator Pattern", RuleCategory::Transaction, "Cross-Border", Severity::Critical, "85", "≥5 deposits <BDT 200K → wire ≥70% / 168h", "Multiple small deposits aggregated then sent as international wire. Terrorism financing indicator."),
    rule("CORRESPONDENT_ANOMALY", "Correspondent Banking Anomaly", RuleCategory::Transaction, "Cross-Border", Severity::High, "70", "BDT 50,000,000 OR ≥100 txns / 30 days", "Unusual patterns in nostro/vostro/correspondent accounts."),
    rule("ROUND_TRIP", "Circular Fund Flow", RuleCategory::Transaction, "Layering", Severity::Critical, "90", "≥2 round-trips, amount ±5% / 30 days", "Funds sent to a party and received back at similar amounts. Circular flow."),
    rule("SAME_DAY_IN_OUT", "Same-Day In/Out", RuleCategory::Transaction, "Layering", Severity::High, "75", "BDT 500,000 in; out ≥80% / 24h", "Large same-day credit followed by matching debit."),
    rule("COMPLEX_CHAIN", "Complex Transfer Chain", RuleCategory::Transaction, "Layering", Severity::Critical, "90", "≥3 hops, amount ±10%, multi-country / 30 days", "Multi-hop A→B→C→D transfer chains detected via recursive analysis."),
    rule("AUTO_CTR", "Auto-CTR Filing", RuleCategory::Transaction, "Regulatory", Severity::High, "80", "BDT 1,000,000 / 24h", "Automatic CTR filing trigger. Report deadline: 24 hours."),
    rule("STR_COMPOSITE", "STR Composite Score", RuleCategory::Transaction, "Regulatory", Severity::Critical, "up to 100", "≥10 txns, composite ≥70/100 / 30 days", "Multi-indicator composite scoring: high-risk txns, cash ratio, countries, volume."),
    rule("NGO_MISUSE", "NGO/NPO Fund Misuse", RuleCategory::Transaction, "Regulatory", Severity::Critical, "80", "BDT 1,000,000; non-operational >70% / 30 days", "Charitable organizations spending >70% on non-operational items."),
    rule("ADVERSE_MEDIA_TXN", "Adverse Media Customer", RuleCategory::Transaction, "Regulatory", Severity::High, "70", "BDT 250,000 / 24h", "Customers with adverse_media_flag get lowered monitoring thresholds."),
    rule("SWIFT_SANCTION_RT", "SWIFT Real-Time Screening", RuleCategory::Transaction, "SWIFT & Payments", Severity::Critical, "95", "Any SWIFT to sanctioned country / 1h", "Near-real-time screening of SWIFT messages to KP, IR, SY, CU, VE, RU, BY. Action: FREEZE."),
    rule("SANCTIONED_COUNTRY_PAYMENT", "Sanctioned Country Payment", RuleCategory::Transaction, "SWIFT & Payments", Severity::Critical, "95", "Any outbound to sanctioned country / 24h", "Any payment to sanctioned country. Action: block_and_report."),
    rule("SWIFT_PATTERN_ANOMALY", "SWIFT Pattern Anomaly", RuleCategory::Transaction, "SWIFT & Payments", Severity::High, "70", "≥10 SWIFT to ≥5 countries / 168h", "Unusual SWIFT transfer pattern across many countries."),
    rule("SANCTION_INDIVIDUAL", "Individual Sanction Screening", RuleCategory::Sanction, "Screening", Severity::Critical, "85-95", "Match score ≥85%", "Screen individual customer names against sanction lists with fuzzy matching."),
    rule("SANCTION_CORPORATE", "Corporate Sanction Screening", RuleCategory::Sanction, "Screening", Severity::Critical, "85-95", "Match score ≥85%", "Screen corporate/business names against sanction lists."),
    rule("SANCTION_PEP", "PEP Screening", RuleCategory::Sanction, "Screening", Severity::High, "80-90", "Match score ≥85%", "Screen customers against Politically Exposed Persons lists."),
    rule("SANCTION_VESSEL", "Vessel Screening", RuleCategory::Sanction, "Screening", Severity::High, "80", "Match score ≥85%", "Screen vessel names and IMO numbers against sanctioned vessel lists."),
    rule("SANCTION_ASSET", "Asset Screening", RuleCategory::Sanction, "Screening", Severity::High, "80", "Match score ≥85%", "Screen asset registrations against sanctioned asset databases."),
    rule("SANCTION_ADVERSE_MEDIA", "Adverse Media Screening", RuleCategory::Sanction, "Screening", Severity::Medium, "70", "Match score ≥85%", "Screen for adverse media mentions related to customers."),
    rule("TBML-001", "Related Party / Common Interest", RuleCategory::Trade, "Applicant & Beneficiary", Severity::High, "65-70", "Same address or name similarity >70%", "Applicant and beneficiary share address or have >70% name similarity."),
    rule("TBML-002", "Residential/Agent Address", RuleCategory::Trade, "Applicant & Beneficiary", Severity::Medium, "50", "Residential keywords in address", "Party address contains residential keywords (house, flat, apartment, বাড়ি)."),
    rule("TBML-003", "Suspicious Customer Behaviour", RuleCategory::Trade, "Applicant & Beneficiary", Severity::Critical, "75", "LC validity < 7 days", "LC with extremely short validity period indicating extreme pressure."),
    rule("TBML-004", "PEP/Influential Person", RuleCategory::Trade, "Applicant & Beneficiary", Severity::Critical, "80", "Any party with PEP flag", "Any party in the LC has PEP flag set."),
    rule("TBML-005", "Unexplained Intermediary", RuleCategory::Trade, "Third Party", Severity::High, "65", "Intermediary with missing info", "Intermediary/agent/broker with missing address or country."),
    rule("TBML-006", "Too Many Intermediaries", RuleCategory::Trade, "Third Party", Severity::High, "70", ">3 non-core parties", "More than 3 non-core (intermediary/broker/agent) parties in the LC."),
    rule("TBML-007", "Complex Structure", RuleCategory::Trade, "Transaction Structure", Severity::High, "70", "≥2 of: transferable, transshipment, >3 countries", "LC has multiple complexity indicators simultaneously."),
    rule("TBML-008", "Business Profile Mismatch", RuleCategory::Trade, "Transaction Structure", Severity::High, "70", "Goods ≠ customer TTP", "LC goods do not match customer trade transaction profile commodities."),
    rule("TBML-009", "Non-Standard Terms", RuleCategory::Trade, "Transaction Structure", Severity::Medium, "55", "Suspicious clause keywords", "LC contains suspicious clauses: assignable, bearer instrument, without recourse, etc."),
    rule("TBML-010", "Frequent Amendment", RuleCategory::Trade, "Transaction Structure", Severity::High, "60-75", "≥3 amendments (≥5=high)", "LC has been amended 3 or more times."),
    rule("TBML-011", "Shell/Front Company", RuleCategory::Trade, "Transaction Structure", Severity::Critical, "80", "Party in shell jurisdictions", "Party registered in shell company jurisdictions (PA, VG, KY, BZ, SC, MH, LR, WS, VU)."),
    rule("TBML-012", "Guarantee No Reference", RuleCategory::Trade, "Transaction Structure", Severity::High, "65", "Guarantee/SBLC without contract ref", "Guarantee or standby LC without underlying contract reference."),
    rule("TBML-013", "Fake Underlying Transaction", RuleCategory::Trade, "Transaction Structure", Severity::Critical, "75", "Active LC with no invoices/shipments", "Active/confirmed LC with zero invoices and zero shipments."),
    rule("TBML-014", "Unusual Pricing", RuleCategory::Trade, "Value & Price", Severity::High, "55-75", "Price deviation >50%", "Significant price deviation from market reference in invoice."),
    rule("TBML-015", "Under-Invoicing", RuleCategory::Trade, "Value & Price", Severity::Critical, "85", "Under-invoicing flag", "Invoice flagged for under-invoicing compared to market prices."),
    rule("TBML-016", "Over-Invoicing", RuleCategory::Trade, "Value & Price", Severity::Critical, "85", "Over-invoicing flag", "Invoice flagged for over-invoicing compared to market prices."),
    rule("TBML-017", "Excessive Misc Charges", RuleCategory::Trade, "Value & Price", Severity::High, "65", "Misc charges >15% of LC value", "Miscellaneous/handling/fee charges exceed 15% of the LC value."),
    rule("TBML-018", "Double/Multiple Invoicing", RuleCategory::Trade, "Value & Price", Severity::Critical, "85", "Duplicate invoice (same amount + seller)", "Two or more invoices with the same seller and amount — duplicate invoicing."),
    rule("TBML-019", "Inconsistent Payment Terms", RuleCategory::Trade, "Payment Anomalies", Severity::High, "60", "Sight payment but tenor >0", "LC says AT_SIGHT payment but tenor days is greater than zero."),
    rule("TBML-020", "Third-Party Payment", RuleCategory::Trade, "Payment Anomalies", Severity::High, "70", "Payment to non-LC party", "Payment directed to a party not named in the LC."),
    rule("TBML-021", "Payment Country Mismatch", RuleCategory::Trade, "Payment Anomalies", Severity::High, "70", "Payment country ≠ beneficiary country", "Payment routed to a country different from the beneficiary's country."),
    rule("TBML-022", "Last-Minute Payment Change", RuleCategory::Trade, "Payment Anomalies", Severity::Critical, "80", "Amendment changing payment/beneficiary", "Suspicious amendment changing payment details, beneficiary, account, or bank."),
    rule("TBML-023", "Applicant Controls Payment", RuleCategory::Trade, "Payment Anomalies", Severity::Medium, "50", "\"Applicant approval\" in terms", "Payment terms contain \"applicant approval\" or \"buyer discretion\" clauses."),
    rule("TBML-024", "Early Guarantee Claim", RuleCategory::Trade, "Payment Anomalies", Severity::High, "70", "Guarantee claimed <30 days of issue", "Bank guarantee claimed within less than 30 days of issuance."),
    rule("TBML-025", "Fraudulent Letter of Undertaking", RuleCategory::Trade, "Payment Anomalies", Severity::Critical, "90", "LoU without collateral", "Letter of Undertaking issued without any collateral backing."),
    rule("TBML-026", "Phantom Shipment", RuleCategory::Trade, "Goods & Shipment", Severity::Critical, "90", "Active LC, zero shipments + zero docs", "Active LC with no shipments and no documents — purely fictitious trade."),
    rule("TBML-027", "Unclear/No Goods Description", RuleCategory::Trade, "Goods & Shipment", Severity::High, "65-70", "Vague goods description", "LC goods description is empty or vague (\"general merchandise\", \"various goods\")."),
    rule("TBML-028", "Trade Pattern Deviation", RuleCategory::Trade, "Goods & Shipment", Severity::High, "70", "LC amount >50% above customer avg", "LC amount significantly exceeds customer historical average."),
    rule("TBML-029", "Dual-Use Goods", RuleCategory::Trade, "Goods & Shipment", Severity::Critical, "85", "Dual-use flag or HS code match", "LC involves dual-use goods that could have military applications."),
    rule("TBML-030", "HS Code Mismatch", RuleCategory::Trade, "Goods & Shipment", Severity::High, "70", "Invoice HS ≠ LC HS (4-digit prefix)", "Invoice item HS code differs from the LC declared HS code."),
    rule("TBML-031", "Quantity vs Container Capacity", RuleCategory::Trade, "Goods & Shipment", Severity::High, "75", "Weight > 28000kg × packages × 1.1", "Declared weight exceeds physical container capacity limits."),
    rule("TBML-032", "High-Risk Goods", RuleCategory::Trade, "Goods & Shipment", Severity::High, "70", "High-risk goods keywords", "LC involves high-risk goods: gold, diamond, weapons, tobacco, pharmaceuticals."),
    rule("TBML-033", "Inconsistent Route", RuleCategory::Trade, "Transport & Routing", Severity::High, "70", "Circuitous route flag", "Shipping route is unnecessarily circuitous or illogical."),
    rule("TBML-034", "Unjustified Transshipment", RuleCategory::Trade, "Transport & Routing", Severity::High, "65", "Transshipment with named port, no justification", "Transshipment allowed with a named port but no documented justification."),
    rule("TBML-035", "Unclear Shipping", RuleCategory::Trade, "Transport & Routing", Severity::Medium, "50", "Missing shipping mode or ports", "Missing shipping mode, port of loading, or port of discharge."),
    rule("TBML-036", "Origin ≠ Beneficiary Country", RuleCategory::Trade, "Transport & Routing", Severity::High, "65", "Shipment origin ≠ beneficiary/seller", "Shipment origin country does not match beneficiary or seller country."),
    rule("TBML-037", "Untrackable/Sanctioned Vessel", RuleCategory::Trade, "Transport & Routing", Severity::Critical, "80-95", "No vessel name/IMO or sanctioned vessel", "Sea shipment with no vessel name/IMO number, or vessel is on sanctioned list."),
    rule("TBML-038", "Missing Container Numbers", RuleCategory::Trade, "Transport & Routing", Severity::High, "65", "Packages declared but no container refs", "Packages are declared but no container numbers provided."),
    rule("TBML-039", "FATF High-Risk/Grey-List Country", RuleCategory::Trade, "Country & Jurisdiction", Severity::Critical, "70-90", "Party from FATF list", "Party from FATF black list (90) or grey list (70)."),
    rule("TBML-040", "High-Risk Country Trade", RuleCategory::Trade, "Country & Jurisdiction", Severity::High, "75", "high_risk_country_flag set", "LC has the high_risk_country_flag set."),
    rule("TBML-041", "Sanctioned Entity in Trade", RuleCategory::Trade, "Country & Jurisdiction", Severity::Critical, "75-95", "Screening result HIT or POTENTIAL_MATCH", "Party screening result is HIT (95) or POTENTIAL_MATCH (75)."),
    rule("TBML-042", "Goods Description Discrepancy", RuleCategory::Trade, "Document Discrepancies", Severity::High, "70", "discrepancy_found = true", "Trade document has discrepancy_found flag set."),
    rule("TBML-043", "LC Clause Abuse", RuleCategory::Trade, "Document Discrepancies", Severity::High, "70", "\"all discrepancy acceptable\" clause", "LC contains clauses like \"all discrepancy acceptable\" to bypass controls."),
    rule("TBML-044", "Essential Documents Missing", RuleCategory::Trade, "Document Discrepancies", Severity::High, "65", "Missing BL, invoice, or CoO", "Missing bill of lading, commercial invoice, or certificate of origin for non-draft LC."),
    rule("TBML-045", "Excessive Waivers / Overdrawn LC", RuleCategory::Trade, "Document Discrepancies", Severity::High, "65-70", ">3 waivers or utilized >110% of LC", "More than 3 waivers granted, or utilized amount exceeds 110% of LC limit."),
    rule("TBML-046", "Excessive Discrepancy Acceptance", RuleCategory::Trade, "Document Discrepancies", Severity::Medium, "55", ">3 discrepancies accepted without query", "Multiple document discrepancies accepted without proper review."),
    rule("TBML-047", "Altered/Suspicious Documents", RuleCategory::Trade, "Unusual Documentation", Severity::Critical, "85", "Discrepancy AND failed verification", "Document has discrepancy AND failed verification check."),
    rule("TBML-048", "Reused Documents", RuleCategory::Trade, "Unusual Documentation", Severity::Critical, "90", "Document hash matches another LC", "Document hash matches a document from another LC — reuse of trade documents."),
    rule("ADV-001", "Carousel/Circular Trading", RuleCategory::Trade, "Advanced Typology", Severity::Critical, "85", "≥3 reverse-direction LCs same countries / 90d", "Circular trading pattern: goods flowing back and forth between same countries."),
    rule("ADV-002", "Trade-Based Layering", RuleCategory::Trade, "Advanced Typology", Severity::Critical, "80", "≥4 parties across ≥4 jurisdictions", "Complex multi-jurisdiction LC with many parties to obscure beneficial ownership."),
    rule("ADV-003", "Free Trade Zone Abuse", RuleCategory::Trade, "Advanced Typology", Severity::High, "70", "Route through FTZ ports", "Trade routed through Free Trade Zone ports (Jebel Ali, Labuan, Colon, HK, SG, Dubai)."),
    rule("ADV-004", "Mirror Trade Detection", RuleCategory::Trade, "Advanced Typology", Severity::Critical, "85", "Matching opposite-direction LC (±5%) / 7d", "Two LCs with matching amounts in opposite directions within 7 days."),
    rule("ADV-005", "BMPE Pattern", RuleCategory::Trade, "Advanced Typology", Severity::Critical, "75", "Trade on BMPE corridors", "Trade on Black Market Peso Exchange corridors (Colombia ↔ US/Mexico/Panama)."),
    rule("ADV-006", "Quantity Misrepresentation", RuleCategory::Trade, "Advanced Typology", Severity::High, "70", "Invoice qty deviates >10% from LC qty", "Invoice quantity differs from LC declared quantity by more than 10%."),
    rule("ADV-007", "LCAF Value Excess", RuleCategory::Trade, "Advanced Typology", Severity::High, "65", "LC amount >LCAF value by >5%", "LC amount exceeds LCAF (LC Application Form) authorized value."),
    rule("ADV-008", "Export Basket Mismatch", RuleCategory::Trade, "Advanced Typology", Severity::High, "60", "HS code not in origin export basket", "HS code of goods not in the exporting country's typical export basket."),
    rule("ADV-009", "Multiple LC Same Collateral", RuleCategory::Trade, "Advanced Typology", Severity::Critical, "90", "Same collateral ref in multiple active LCs", "Same collateral reference used for multiple active LCs."),
    rule("ADV-010", "Hawala/Advance Payment", RuleCategory::Trade, "Advanced Typology", Severity::Critical, "75", "Advance payment >50% of LC value", "Advance payment exceeds 50% of the LC value — potential hawala indicator."),
];

/// Rules of one category, as listed by `rules`.
#[derive(Debug, Clone, Serialize)]
pub struct RuleGroup {
    pub id: RuleCategory,
    pub name: &'static str,
    pub description: String,
    pub rules: Vec<&'static Rule>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub categories: Vec<RuleGroup>,
    pub total_rules: usize,
}

/// Read-only view over the built-in rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleCatalog {
    rules: &'static [Rule],
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleCatalog {
    pub fn builtin() -> Self {
        Self { rules: RULES }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| rule.code == code)
    }

    pub fn lookup(&self, code: &str) -> Result<&'static Rule> {
        self.get(code)
            .ok_or_else(|| ViolationError::UnknownRule(code.to_string()))
    }

    pub fn by_category(&self, category: RuleCategory) -> impl Iterator<Item = &'static Rule> {
        self.rules
            .iter()
            .filter(move |rule| rule.category == category)
    }

    pub fn grouped(&self) -> CatalogView {
        let categories = RuleCategory::ALL
            .into_iter()
            .map(|category| {
                let rules: Vec<&'static Rule> = self.by_category(category).collect();
                RuleGroup {
                    id: category,
                    name: category.group_name(),
                    description: category.group_description(rules.len()),
                    rules,
                }
            })
            .collect();
        CatalogView {
            categories,
            total_rules: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let catalog = RuleCatalog::builtin();
        let codes: HashSet<&str> = catalog.rules().iter().map(|rule| rule.code).collect();
        assert_eq!(codes.len(), catalog.len());
    }

    #[test]
    fn data_type_follows_category() {
        for rule in RuleCatalog::builtin().rules() {
            assert_eq!(rule.data_type, rule.category.data_type(), "{}", rule.code);
        }
    }

    #[test]
    fn lookup_rejects_unknown_codes() {
        let catalog = RuleCatalog::builtin();
        assert_eq!(catalog.lookup("TBML-048").expect("rule").name, "Reused Documents");
        assert!(matches!(
            catalog.lookup("TBML-999"),
            Err(ViolationError::UnknownRule(code)) if code == "TBML-999"
        ));
    }

    #[test]
    fn rule_serializes_camel_case() {
        let rule = RuleCatalog::builtin().lookup("CASH_THRESHOLD").expect("rule");
        let value = serde_json::to_value(rule).expect("json");
        assert_eq!(value["riskScore"], "80");
        assert_eq!(value["dataType"], "transaction");
        assert_eq!(value["severity"], "high");
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(RuleCategory::parse("Trade"), Some(RuleCategory::Trade));
        assert_eq!(RuleCategory::parse("credit"), None);
    }
}
