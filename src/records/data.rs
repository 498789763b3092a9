use crate::records::types::{Farmer, Officer, Recipient};

pub static GOVT_RECIPIENTS: &[Recipient] = &[
    Recipient {
        role: "Tehsildar",
        email: "atharvakulkarrni@gmail.com",
        phone: "9518916651",
    },
    Recipient {
        role: "Talathi",
        email: "atharvak706@gmail.com",
        phone: "9689902706",
    },
    Recipient {
        role: "Police Patil",
        email: "2022bec014@sggs.ac.in",
        phone: "9689722003",
    },
    Recipient {
        role: "State Gov Disaster Cell",
        email: "adityakulkarni2608@gmail.com",
        phone: "7709802706",
    },
];

pub static FARMERS: &[Farmer] = &[
    Farmer {
        id: "FARM101",
        name: "Yogesh Kadam",
        email: "yogesh.kadam@farm.com",
        phone: "9876512345",
        address: "Plot 14, Taluka Wai",
        village: "Shendurjane",
        bank_account: "SBI-123456789",
        financial_status: "Marginal Farmer (Below Poverty Line)",
    },
    Farmer {
        id: "FARM102",
        name: "Rohit Deshmukh",
        email: "rohit.deshmukh@farm.com",
        phone: "9123456789",
        address: "Plot 22, Taluka Wai",
        village: "Shendurjane",
        bank_account: "HDFC-987654321",
        financial_status: "Small Farmer",
    },
    Farmer {
        id: "FARM103",
        name: "Priya Bhosle",
        email: "priya.bhosle@farm.com",
        phone: "8888123456",
        address: "Plot 5, Taluka Karad",
        village: "Wai Gaon",
        bank_account: "ICICI-1122334455",
        financial_status: "Large Farmer",
    },
    Farmer {
        id: "FARM104",
        name: "Amit Jadhav",
        email: "amit.jadhav@farm.com",
        phone: "8007006005",
        address: "Main Road, Kumtha",
        village: "Kumtha",
        bank_account: "PNB-4567890123",
        financial_status: "Small Farmer",
    },
];

// Soil testing officers, in the order the booking dropdown lists them.
pub static OFFICERS: &[Officer] = &[
    Officer {
        name: "Yogesh Kadam",
        email: "kadamyogiraj412@gmail.com",
    },
    Officer {
        name: "Atharva Kulkarni",
        email: "atharvak706@gmail.com",
    },
    Officer {
        name: "Rupali Shirnath",
        email: "shirnathrupali@gmail.com",
    },
    Officer {
        name: "Ankit Khamitkar",
        email: "ankit.khamitkar@gmail.com",
    },
];
