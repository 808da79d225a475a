// Pools for the faker-style generators. A few entries carry apostrophes on
// purpose so every load exercises string quoting.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Sandra", "Mark", "Margaret", "Donald", "Ashley", "Steven", "Kimberly", "Andrew", "Emily",
    "Paul", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda", "Brian",
    "Melissa", "George", "Deborah", "Timothy", "Stephanie", "Ronald", "Rebecca", "Jason", "Sharon",
    "Edward", "Laura", "Jeffrey", "Cynthia", "Ryan", "Dorothy", "Jacob", "Amy", "Gary", "Kathleen",
    "Nicholas", "Angela", "Eric", "Shirley", "Jonathan", "Brenda", "Stephen", "Emma", "Larry",
    "Anna", "Justin", "Pamela", "Scott", "Nicole", "Brandon", "Samantha", "D'Andre", "Shaquille",
    "Renée", "José", "Zoë",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "O'Brien", "O'Connor", "D'Angelo",
    "McDonald", "Müller",
];

pub const CITY_PREFIXES: &[&str] = &[
    "North", "East", "West", "South", "New", "Lake", "Port", "Fort", "Saint",
];

pub const CITY_ROOTS: &[&str] = &[
    "Jason", "Michael", "Robert", "Ash", "Cedar", "Elm", "Maple", "Oak", "Pine", "River", "Spring",
    "Brook", "Fair", "Green", "Wood", "Stone", "Clear", "Silver",
];

pub const CITY_SUFFIXES: &[&str] = &[
    "ton", "ville", "burgh", "port", "view", "haven", "side", "field", "mouth", "land", "berg",
    "chester", "furt", "shire",
];

pub const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"), ("Arkansas", "AR"),
    ("California", "CA"), ("Colorado", "CO"), ("Connecticut", "CT"), ("Delaware", "DE"),
    ("Florida", "FL"), ("Georgia", "GA"), ("Hawaii", "HI"), ("Idaho", "ID"), ("Illinois", "IL"),
    ("Indiana", "IN"), ("Iowa", "IA"), ("Kansas", "KS"), ("Kentucky", "KY"), ("Louisiana", "LA"),
    ("Maine", "ME"), ("Maryland", "MD"), ("Massachusetts", "MA"), ("Michigan", "MI"),
    ("Minnesota", "MN"), ("Mississippi", "MS"), ("Missouri", "MO"), ("Montana", "MT"),
    ("Nebraska", "NE"), ("Nevada", "NV"), ("New Hampshire", "NH"), ("New Jersey", "NJ"),
    ("New Mexico", "NM"), ("New York", "NY"), ("North Carolina", "NC"), ("North Dakota", "ND"),
    ("Ohio", "OH"), ("Oklahoma", "OK"), ("Oregon", "OR"), ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"), ("South Carolina", "SC"), ("South Dakota", "SD"),
    ("Tennessee", "TN"), ("Texas", "TX"), ("Utah", "UT"), ("Vermont", "VT"), ("Virginia", "VA"),
    ("Washington", "WA"), ("West Virginia", "WV"), ("Wisconsin", "WI"), ("Wyoming", "WY"),
];

pub const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Canada", "Chile", "China",
    "Colombia", "Côte d'Ivoire", "Czech Republic", "Denmark", "Egypt", "Finland", "France",
    "Germany", "Greece", "Hungary", "India", "Indonesia", "Ireland", "Israel", "Italy", "Japan",
    "Kenya", "Korea", "Mexico", "Morocco", "Netherlands", "New Zealand", "Nigeria", "Norway",
    "Peru", "Philippines", "Poland", "Portugal", "Romania", "Saudi Arabia", "Singapore",
    "South Africa", "Spain", "Sweden", "Switzerland", "Thailand", "Turkey", "Ukraine",
    "United Kingdom", "United States of America", "Uruguay", "Vietnam",
];

pub const STREET_NAMES: &[&str] = &[
    "Adams", "Baker", "Cherry", "Dogwood", "Franklin", "Highland", "Jackson", "Lincoln",
    "Madison", "Meadow", "Mill", "Park", "Ridge", "Sunset", "Valley", "Walnut", "Washington",
    "Willow", "Hunter's", "King's",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Way", "Boulevard", "Terrace",
    "Crossing", "Parkway",
];

pub const SECONDARY_UNITS: &[&str] = &["Apt.", "Suite"];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "gmail.com", "yahoo.com", "hotmail.com",
];

pub const PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###)###-####",
    "###.###.####",
    "+1-###-###-####",
    "001-###-###-####x###",
    "###-###-####x####",
];

pub const JOBS: &[&str] = &[
    "Accountant, chartered", "Actuary", "Administrator, education", "Architect",
    "Art therapist", "Barrister", "Biomedical engineer", "Broadcast journalist",
    "Building surveyor", "Chartered loss adjuster", "Chemical engineer", "Civil Service fast streamer",
    "Clinical psychologist", "Commercial horticulturist", "Community pharmacist",
    "Data scientist", "Designer, interior/spatial", "Dietitian", "Editor, magazine features",
    "Engineer, petroleum", "Environmental consultant", "Financial adviser", "Firefighter",
    "Geophysicist/field seismologist", "Graphic designer", "Health visitor", "Hydrologist",
    "IT consultant", "Lawyer", "Librarian, public", "Loss adjuster, chartered",
    "Market researcher", "Mechanical engineer", "Merchandiser, retail", "Nurse, children's",
    "Occupational therapist", "Paramedic", "Pharmacist, hospital", "Physicist, medical",
    "Police officer", "Programmer, systems", "Quantity surveyor", "Radiographer, diagnostic",
    "Sales executive", "Software engineer", "Solicitor", "Sports coach", "Teacher, primary school",
    "Tour manager", "Translator", "Veterinary surgeon", "Web designer",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Group", "PLC", "and Sons"];

pub const COMPANY_FORMATS: usize = 3;

/// Lorem-style word pool for product names and categories.
pub const WORDS: &[&str] = &[
    "alpha", "anchor", "apex", "arc", "aura", "basic", "beacon", "blend", "bold", "bright",
    "carbon", "cedar", "classic", "cloud", "coast", "comet", "core", "craft", "crest", "delta",
    "drift", "echo", "edge", "ember", "flex", "flow", "forge", "frost", "fusion", "glide",
    "grain", "harbor", "haven", "horizon", "iron", "jade", "kinetic", "lumen", "lunar", "maple",
    "matrix", "metro", "mint", "nova", "oak", "orbit", "pace", "peak", "pixel", "prime", "pulse",
    "quartz", "quest", "ridge", "river", "sage", "scout", "shift", "sierra", "solar", "spark",
    "sprout", "stone", "storm", "summit", "terra", "tide", "trail", "true", "urban", "vapor",
    "vertex", "vivid", "wave", "willow", "zen", "zephyr",
];
