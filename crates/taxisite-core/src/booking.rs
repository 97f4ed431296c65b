//! Booking hand-off and contact links.
//!
//! Visitors never submit bookings to us: the form is rendered into a
//! WhatsApp deep link to the primary phone and the browser opens it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use taxisite_types::{BookingDetails, BookingError, SiteConfig, SocialLink};

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const WHATSAPP_BASE: &str = "https://wa.me/";
const NO_VEHICLE: &str = "Not Selected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingLink {
    pub url: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLinks {
    pub phone: Option<String>,
    pub tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_tel: Option<String>,
    pub email: Option<String>,
    pub mailto: Option<String>,
    pub whatsapp: Option<String>,
    pub address: String,
    pub service_areas: Vec<String>,
    pub social_links: Vec<SocialLink>,
}

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Digits only, as WhatsApp expects them in the path.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn tel_link(phone: &str) -> String {
    format!("tel:{phone}")
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{email}")
}

/// Bare chat link, `None` when the number has no digits.
pub fn whatsapp_chat_link(phone: &str) -> Option<String> {
    let digits = phone_digits(phone);
    (!digits.is_empty()).then(|| format!("{WHATSAPP_BASE}{digits}"))
}

pub fn booking_message(config: &SiteConfig, details: &BookingDetails) -> String {
    let vehicle = config
        .vehicle(&details.vehicle_id)
        .map(|v| v.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(NO_VEHICLE);

    format!(
        "*New Booking Request from Website*\n\
         Name: {}\n\
         Phone: {}\n\
         Vehicle: {}\n\
         Pickup: {}\n\
         Drop: {}\n\
         Date: {}\n\
         Time: {}\n\
         Type: {}",
        details.customer_name,
        details.customer_phone,
        vehicle,
        details.pickup_location,
        details.drop_location,
        details.date,
        details.time,
        details.trip_type,
    )
}

/// Validate the form and build the WhatsApp link carrying it.
pub fn booking_link(config: &SiteConfig, details: &BookingDetails) -> Result<BookingLink, BookingError> {
    details.check_required()?;

    let phone = config.primary_phone().ok_or(BookingError::NoPhone)?;
    let digits = phone_digits(phone);
    if digits.is_empty() {
        return Err(BookingError::InvalidPhone { phone: phone.to_string() });
    }

    let message = booking_message(config, details);
    let url = format!("{WHATSAPP_BASE}{digits}?text={}", encode_uri_component(&message));
    tracing::debug!(vehicle = %details.vehicle_id, trip = %details.trip_type, "Built booking link");
    Ok(BookingLink { url, message })
}

pub fn contact_links(config: &SiteConfig) -> ContactLinks {
    let phone = config.primary_phone();
    let email = config.primary_email();
    ContactLinks {
        phone: phone.map(str::to_string),
        tel: phone.map(tel_link),
        secondary_tel: config.secondary_phone.as_deref().map(tel_link),
        email: email.map(str::to_string),
        mailto: email.map(mailto_link),
        whatsapp: phone.and_then(whatsapp_chat_link),
        address: config.address.clone(),
        service_areas: config.service_areas.clone(),
        social_links: config.social_links.clone(),
    }
}
