//! Closed option lists offered by the registration form

pub const COURTS: &[&str] = &["District Court", "High Court", "Supreme Court"];

pub const SPECIALIZATIONS: &[&str] = &[
    "Criminal Law",
    "Family Law",
    "Corporate Law",
    "Civil Law",
    "Constitutional Law",
    "Intellectual Property",
    "Tax Law",
    "Labor Law",
    "Real Estate Law",
];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Hindi",
    "Bengali",
    "Telugu",
    "Marathi",
    "Tamil",
    "Urdu",
    "Gujarati",
    "Kannada",
    "Odia",
    "Punjabi",
    "Malayalam",
    "Assamese",
];

pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
];

pub const DAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const TIME_SLOTS: &[&str] = &[
    "Morning (9AM-12PM)",
    "Afternoon (12PM-4PM)",
    "Evening (4PM-8PM)",
];
