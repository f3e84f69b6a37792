//! Jurisdiction, port and goods reference lists used by the builders.

pub const FATF_BLACKLIST: &[&str] = &["KP", "IR", "MM", "SY", "YE", "AF"];

pub const FATF_GREYLIST: &[&str] = &[
    "PK", "JM", "TR", "VN", "PH", "NG", "TZ", "UG", "ZW", "HT", "ML", "BF", "CM", "MZ", "SS", "CD",
    "SO", "LY", "LB", "SA",
];

pub const TAX_HAVENS: &[&str] = &[
    "BM", "BS", "KY", "VG", "PA", "JE", "GG", "IM", "GI", "MC", "LI", "AD", "MU", "SC", "BZ", "TC",
    "AG", "KN", "WS", "VU",
];

pub const SANCTIONED_COUNTRIES: &[&str] = &["KP", "IR", "SY", "CU", "VE", "RU", "BY", "MM"];

pub const SHELL_JURISDICTIONS: &[&str] = &["PA", "VG", "KY", "BZ", "SC", "MH", "LR", "WS", "VU"];

pub const LANDLOCKED: &[&str] = &[
    "AF", "AM", "AZ", "BT", "BO", "BW", "BF", "BI", "CF", "TD", "ET", "HU", "KZ", "KG", "LA", "LS",
    "MW", "ML", "MN", "NP", "NE", "PY", "RW", "RS", "SK", "SS", "SZ", "TJ", "TM", "UG", "UZ", "ZW",
];

pub const FTZ_PORTS: &[&str] = &[
    "Jebel Ali",
    "Labuan",
    "Colon Free Zone",
    "Hong Kong",
    "Singapore",
    "Dubai",
];

/// Black Market Peso Exchange corridors as (origin, destination).
pub const BMPE_CORRIDORS: &[(&str, &str)] = &[
    ("CO", "US"),
    ("CO", "MX"),
    ("CO", "PA"),
    ("CO", "EC"),
    ("CO", "VE"),
];

pub const HIGH_RISK_GOODS_KEYWORDS: &[&str] = &[
    "gold",
    "diamond",
    "weapon",
    "tobacco",
    "pharmaceutical",
    "nuclear",
    "chemical",
    "explosives",
    "arms",
    "ammunition",
];

pub const BD_BANKS: &[&str] = &[
    "Sonali Bank",
    "Janata Bank",
    "Agrani Bank",
    "Rupali Bank",
    "BRAC Bank",
    "Eastern Bank",
    "Dutch-Bangla Bank",
    "Islami Bank",
    "Prime Bank",
    "City Bank",
];

pub const BD_NAMES: &[&str] = &[
    "Mohammad Rahman",
    "Abdul Karim",
    "Rafiqul Islam",
    "Shafiqul Haque",
    "Kamrul Hassan",
    "Mizanur Rahman",
    "Shahidul Islam",
    "Nurul Amin",
    "Alamgir Hossain",
    "Farid Ahmed",
    "Fatima Begum",
    "Nasreen Akter",
    "Rahima Khatun",
    "Salma Begum",
    "Hasina Akter",
    "Ayesha Siddiqua",
    "Jannatul Ferdous",
    "Taslima Akter",
    "Razia Sultana",
    "Mst Halima",
];

pub const PURPOSES: &[&str] = &[
    "Business Payment",
    "Import Settlement",
    "Salary Transfer",
    "Investment",
    "Personal Transfer",
    "Loan Repayment",
    "Trade Settlement",
    "Service Payment",
];

pub const DHAKA_AREAS: &[&str] = &["Gulshan", "Dhanmondi", "Banani", "Motijheel", "Mirpur"];

pub const TRADE_PORTS: &[&str] = &[
    "Shanghai",
    "Singapore",
    "Chittagong",
    "Busan",
    "Rotterdam",
    "Hamburg",
    "Dubai",
    "Mumbai",
    "Colombo",
    "Hong Kong",
];

pub const HS_CODES: &[&str] = &[
    "8471", "6204", "3004", "8517", "2710", "7108", "0901", "5209", "8703", "6110",
];

pub const PEP_POSITIONS: &[&str] = &[
    "Member of Parliament",
    "Minister of Finance",
    "Central Bank Governor",
    "Senior Military Officer",
    "State Enterprise Director",
];
