//! Site-wide contact configuration. Plain constants by design; there is
//! no environment or file-based configuration surface.

pub const PHONE_NUMBER: &str = "+919074435902";
pub const WHATSAPP_NUMBER: &str = "+918157959828";
pub const WHATSAPP_MESSAGE: &str = "Hello! I'd like to inquire about your services.";

pub const OFFICE_ADDRESS: &str = "304 & 305 , Oxford Tower , Business Bay, Dubai";
pub const OFFICE_COUNTRY: &str = "United Arab Emirates";
pub const OFFICE_PHONE: &str = "+971 4 453 4945";
pub const OFFICE_EMAIL: &str = "info@keynesgroupuae.com";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3916.694150711368!2d76.22092247355516!3d10.986442455287861!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3ba7cd17c99d6635%3A0x7148e36faaafed57!2sFirst%20Logic%20Meta%20Lab%20Pvt%20Ltd!5e0!3m2!1sen!2sin!4v1754644207030!5m2!1sen!2sin";

/// Click-to-chat link: digits-only number, percent-encoded message.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
}

pub fn tel_url(number: &str) -> String {
    format!("tel:{number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_url_strips_non_digits_and_encodes_message() {
        let url = whatsapp_url("+918157959828", "Hello!");
        assert_eq!(url, "https://wa.me/918157959828?text=Hello%21");
    }

    #[test]
    fn whatsapp_url_handles_spaced_numbers() {
        let url = whatsapp_url("+971 4 453 4945", "Hello, I'd like to know more.");
        assert!(url.starts_with("https://wa.me/97144534945?text="));
        assert!(!url.contains(' '));
    }

    #[test]
    fn tel_url_keeps_number_verbatim() {
        assert_eq!(tel_url("+919074435902"), "tel:+919074435902");
    }
}
