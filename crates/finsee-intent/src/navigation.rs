//! Voice navigation registry for the home screen.
//!
//! Each destination registers a list of command phrases. A transcript is
//! resolved by substring match; the first registered destination with a
//! matching phrase wins, so ties break by registration order.

use finsee_core::types::Screen;

/// A navigable destination and the phrases that open it.
#[derive(Debug, Clone)]
pub struct Destination {
    pub screen: Screen,
    /// Name announced when the destination opens, e.g. "Opening Bank transfer".
    pub spoken_name: &'static str,
    /// Command phrases, matched as substrings of the normalized transcript.
    pub phrases: &'static [&'static str],
}

/// Ordered collection of destinations.
#[derive(Debug, Clone)]
pub struct NavigationRegistry {
    destinations: Vec<Destination>,
}

impl Default for NavigationRegistry {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

impl NavigationRegistry {
    /// The banking service destinations, in announcement order.
    pub fn with_default_routes() -> Self {
        Self {
            destinations: vec![
                Destination {
                    screen: Screen::ScanQr,
                    spoken_name: "Scan QR code",
                    phrases: &["scan", "scan qr", "qr code"],
                },
                Destination {
                    screen: Screen::PayPhone,
                    spoken_name: "Pay phone number",
                    phrases: &["pay phone", "phone payment"],
                },
                Destination {
                    screen: Screen::PayContacts,
                    spoken_name: "Pay contacts",
                    phrases: &["pay contacts", "contact payment"],
                },
                Destination {
                    screen: Screen::BankTransfer,
                    spoken_name: "Bank transfer",
                    phrases: &["transfer", "bank transfer"],
                },
                Destination {
                    screen: Screen::CheckBalance,
                    spoken_name: "Check Balance",
                    phrases: &["balance", "check balance"],
                },
                Destination {
                    screen: Screen::Assistant,
                    spoken_name: "Assistance",
                    phrases: &["assistance", "assistant"],
                },
            ],
        }
    }

    /// Resolve a normalized transcript to the first matching destination.
    pub fn resolve(&self, normalized: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|dest| dest.phrases.iter().any(|phrase| normalized.contains(phrase)))
    }

    /// All destinations in registration order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// The spoken list of services for the welcome announcement.
    pub fn spoken_service_list(&self) -> String {
        self.destinations
            .iter()
            .map(|d| d.spoken_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
