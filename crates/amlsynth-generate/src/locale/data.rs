//! Bangladeshi and US reference lists.

pub const MALE_FIRST_NAMES: &[&str] = &[
    "Mohammed", "Abdul", "Md", "Sheikh", "Rafiqul", "Kamal", "Jamal", "Hasan", "Hussain",
    "Rahim", "Rashid", "Tariq", "Zaman", "Faruk", "Salam", "Habib", "Nasir", "Kabir", "Murad",
    "Ashraf", "Iqbal", "Monir", "Shahid", "Delwar", "Masud", "Nurul", "Aminul", "Shafiq",
    "Mahfuz", "Anis", "Sumon", "Shakil", "Tanvir", "Parvez", "Zahid", "Kamrul", "Mizanur",
    "Saiful", "Jahangir", "Khaled", "Imran", "Rashed", "Sajjad", "Arif", "Mominul", "Tawhid",
    "Jubayer", "Nayeem", "Fahim", "Mushfiq",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Fatima", "Aisha", "Khadija", "Nasima", "Rahima", "Sultana", "Hasina", "Shamima", "Taslima",
    "Momena", "Rabeya", "Salma", "Nargis", "Jahanara", "Ruksana", "Parveen", "Shirin",
    "Shahnaz", "Rokeya", "Rina", "Lima", "Tania", "Nusrat", "Farzana", "Rehana", "Rozina",
    "Moushumi", "Laila", "Jesmin", "Shapla", "Nahar", "Monira", "Amina", "Sadia", "Jannatul",
    "Shanta", "Ruma", "Sumaya", "Tasnim", "Maliha",
];

pub const LAST_NAMES: &[&str] = &[
    "Rahman", "Islam", "Hossain", "Ahmed", "Khatun", "Begum", "Akter", "Khan", "Uddin", "Ali",
    "Miah", "Chowdhury", "Siddique", "Hassan", "Karim", "Sheikh", "Talukder", "Sarker", "Alam",
    "Haque", "Bhuiyan", "Sultana", "Mahmud", "Jahan", "Khandaker", "Das", "Roy", "Barua",
    "Mondal", "Bhattacharjee",
];

pub const MALE_FIRST_NAMES_BN: &[&str] = &[
    "মোহাম্মদ", "আব্দুল", "শেখ", "রফিকুল", "কামাল", "জামাল", "হাসান", "হোসাইন", "রহিম", "রশিদ",
    "তারিক", "ফারুক", "সালাম", "হাবিব", "নাসির", "কবির", "মুরাদ", "আশরাফ", "ইকবাল", "মনির",
    "শাহিদ", "দেলোয়ার", "মাসুদ", "নুরুল", "আমিনুল", "শফিক", "মাহফুজ", "আনিস", "সুমন", "শাকিল",
    "তানভীর", "পারভেজ", "জাহিদ", "কামরুল", "মিজানুর", "সাইফুল", "জাহাঙ্গীর", "খালেদ", "ইমরান",
    "রাশেদ",
];

pub const FEMALE_FIRST_NAMES_BN: &[&str] = &[
    "ফাতিমা", "আয়েশা", "খাদিজা", "নাসিমা", "রহিমা", "সুলতানা", "হাসিনা", "শামীমা", "তাসলিমা",
    "মোমেনা", "রাবেয়া", "সালমা", "নার্গিস", "জাহানারা", "রুকসানা", "পারভীন", "শিরিন", "শাহনাজ",
    "রোকেয়া", "রিনা", "তানিয়া", "নুসরাত", "ফারজানা", "রেহানা", "রোজিনা", "লাইলা", "জেসমিন",
    "শাপলা", "নাহার", "মনিরা", "আমিনা", "সাদিয়া", "জান্নাতুল", "শান্তা", "রুমা", "সুমাইয়া",
    "তাসনিম", "মালিহা",
];

pub const LAST_NAMES_BN: &[&str] = &[
    "রহমান", "ইসলাম", "হোসাইন", "আহমেদ", "খাতুন", "বেগম", "আক্তার", "খান", "উদ্দিন", "আলী",
    "মিয়া", "চৌধুরী", "সিদ্দিকী", "হাসান", "করিম", "শেখ", "তালুকদার", "সরকার", "আলম", "হক",
    "ভুইয়া", "সুলতানা", "মাহমুদ", "জাহান", "খন্দকার",
];

pub const CITIES: &[&str] = &[
    "Dhaka", "Chittagong", "Rajshahi", "Khulna", "Sylhet", "Rangpur", "Barisal", "Comilla",
    "Gazipur", "Narayanganj", "Mymensingh", "Bogra", "Cox's Bazar", "Jessore", "Dinajpur",
    "Tangail", "Brahmanbaria", "Narsingdi", "Savar", "Tongi",
];

pub const CITIES_BN: &[&str] = &[
    "ঢাকা", "চট্টগ্রাম", "রাজশাহী", "খুলনা", "সিলেট", "রংপুর", "বরিশাল", "কুমিল্লা", "গাজীপুর",
    "নারায়ণগঞ্জ", "ময়মনসিংহ", "বগুড়া", "কক্সবাজার", "যশোর", "দিনাজপুর", "টাঙ্গাইল",
    "ব্রাহ্মণবাড়িয়া", "নরসিংদী", "সাভার", "টঙ্গী",
];

pub const AREAS: &[&str] = &[
    "Dhanmondi", "Gulshan", "Banani", "Uttara", "Mirpur", "Mohammadpur", "Motijheel",
    "Panthapath", "Farmgate", "Kakrail", "Wari", "Lalbagh", "Tejgaon", "Badda", "Rampura",
    "Khilgaon", "Basundhara", "Nikunja", "Baridhara", "Shantinagar",
];

pub const AREAS_BN: &[&str] = &[
    "ধানমন্ডি", "গুলশান", "বনানী", "উত্তরা", "মিরপুর", "মোহাম্মদপুর", "মতিঝিল", "পান্থপথ",
    "ফার্মগেট", "কাকরাইল", "ওয়ারী", "লালবাগ", "তেজগাঁও", "বাড্ডা", "রামপুরা", "খিলগাঁও",
    "বসুন্ধরা", "নিকুঞ্জ", "বারিধারা", "শান্তিনগর",
];

pub const BANKS: &[&str] = &[
    "Sonali Bank", "Janata Bank", "Agrani Bank", "Rupali Bank", "Bangladesh Krishi Bank",
    "Pubali Bank", "Uttara Bank", "National Bank", "The City Bank", "IFIC Bank",
    "United Commercial Bank", "Eastern Bank", "BRAC Bank", "Dutch-Bangla Bank", "Prime Bank",
    "Southeast Bank", "Dhaka Bank", "Islami Bank Bangladesh", "AB Bank", "NCC Bank", "One Bank",
    "Bank Asia", "Trust Bank", "Shahjalal Islami Bank", "Exim Bank", "Jamuna Bank",
    "Standard Bank", "Mercantile Bank", "Mutual Trust Bank", "First Security Islami Bank",
];

pub const US_BANKS: &[&str] = &[
    "JPMorgan Chase", "Bank of America", "Wells Fargo", "Citibank", "U.S. Bancorp",
    "Truist Financial", "TD Bank", "PNC Financial", "Capital One", "Goldman Sachs",
    "Morgan Stanley", "Fifth Third Bank", "Citizens Bank", "KeyBank", "Regions Bank",
    "M&T Bank", "Huntington Bank", "Ally Financial", "Synchrony Financial",
    "Discover Financial",
];
