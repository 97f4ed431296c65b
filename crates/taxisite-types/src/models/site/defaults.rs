//! Built-in site content used when nothing is cached or fetched.

use chrono::NaiveDate;

use super::{Faq, Hero, Review, SiteConfig, SocialLink, Stat, Vehicle};

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero: Hero {
                title: "Premium Taxi Service In Faridabad".to_string(),
                subtitle: "Whether it's a quick local drop, a late-night airport run, or a scenic \
                           outstation trip, we've got the perfect ride waiting for you. Safe, \
                           reliable, and professional."
                    .to_string(),
                image_url: "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?auto=format&fit=crop&q=80&w=2070"
                    .to_string(),
            },
            stats: vec![
                stat("1", "5000+", "Happy Clients"),
                stat("2", "10+", "Years Exp"),
                stat("3", "24/7", "Availability"),
                stat("4", "15+", "Active Fleet"),
            ],
            phones: vec!["+91 9999711219".to_string()],
            secondary_phone: None,
            emails: vec!["Rajnijeetunagar1986@gmail.com".to_string()],
            address: "Near NIT, Faridabad, Haryana – 121001".to_string(),
            vehicles: vec![
                vehicle("1", "Dzire", "fa-car", [1300, 12, 150, 3000], 4),
                vehicle("2", "Ertiga", "fa-car-side", [1600, 15, 150, 4000], 6),
                vehicle("3", "Innova", "fa-shuttle-van", [1800, 18, 200, 4500], 7),
                vehicle("4", "Innova Crysta", "fa-van-shuttle", [2500, 22, 300, 5500], 7),
            ],
            gallery: [
                "photo-1549317661-bd32c8ce0db2",
                "photo-1581092160562-40aa08e78837",
                "photo-1594051808233-e19ecf20cc9c",
                "photo-1605281317010-fe5ffe798156",
            ]
            .iter()
            .map(|photo| {
                format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=800")
            })
            .collect(),
            social_links: vec![
                SocialLink {
                    id: "s1".to_string(),
                    platform: "Facebook".to_string(),
                    url: "https://facebook.com".to_string(),
                },
                SocialLink {
                    id: "s2".to_string(),
                    platform: "Instagram".to_string(),
                    url: "https://instagram.com".to_string(),
                },
            ],
            service_areas: [
                "NIT Faridabad",
                "Sector 15",
                "Sector 16",
                "Ballabgarh",
                "Greater Faridabad",
                "Green Field",
                "Sainik Colony",
                "Surajkund",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            reviews: vec![
                Review {
                    id: "r1".to_string(),
                    name: "Anil Kumar".to_string(),
                    rating: 5,
                    comment: "Excellent service! The car was clean and the driver was very \
                              professional."
                        .to_string(),
                    date: ymd(2023, 10, 15),
                },
                Review {
                    id: "r2".to_string(),
                    name: "Priya Sharma".to_string(),
                    rating: 4,
                    comment: "Reliable and punctual for my airport drop. Highly recommended."
                        .to_string(),
                    date: ymd(2023, 11, 2),
                },
            ],
            faqs: vec![
                faq(
                    "f1",
                    "Do you offer 24/7 service?",
                    "Yes, we operate 24 hours a day, 7 days a week for all your travel needs.",
                ),
                faq(
                    "f2",
                    "How can I pay for my ride?",
                    "We accept Cash, UPI (GPay, PhonePe), and Net Banking.",
                ),
                faq(
                    "f3",
                    "Are there any hidden charges?",
                    "No, our pricing is transparent. Toll and parking are extra as per actuals.",
                ),
            ],
        }
    }
}

fn stat(id: &str, value: &str, label: &str) -> Stat {
    Stat { id: id.to_string(), value: value.to_string(), label: label.to_string() }
}

fn vehicle(id: &str, name: &str, icon: &str, rates: [u32; 4], capacity: u32) -> Vehicle {
    let [base, km, hour, full_day] = rates;
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        base,
        km,
        hour,
        full_day,
        capacity,
    }
}

fn faq(id: &str, question: &str, answer: &str) -> Faq {
    Faq { id: id.to_string(), question: question.to_string(), answer: answer.to_string() }
}

pub(super) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
