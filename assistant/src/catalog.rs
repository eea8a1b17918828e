//! Static content shown around the conversation: greeting, sidebar cards, branding.

use serde::Serialize;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

pub const APP_TITLE: &str = "TravelBot AI";
pub const APP_TAGLINE: &str = "Your travel companion";
pub const HEADER_TITLE: &str = "Travel Assistant";
pub const HEADER_STATUS: &str = "Online • Ready to help";
pub const SUPPORT_BADGE: &str = "24/7 Support";
pub const INPUT_PLACEHOLDER: &str = "Ask me anything about travel...";
pub const FOOTER_NOTE: &str = "AI-powered travel assistant • Always learning to serve you better";

pub const GREETING: &str = "Hello! I'm your AI Travel Assistant. I can help you plan your perfect trip, find destinations, book flights, and create amazing itineraries. Where would you like to go?";
pub const GREETING_SUGGESTIONS: &[&str] = &["Beach vacation", "Mountain adventure", "City exploration", "Cultural tour"];

/// Sidebar shortcut that submits a fixed prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub icon: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { icon: "🏖️", label: "Beach Vacation", prompt: "Find me a beach vacation" },
    QuickAction { icon: "🏙️", label: "City Tour", prompt: "Plan a city tour" },
    QuickAction { icon: "⛰️", label: "Adventure Trip", prompt: "Adventure trip ideas" },
    QuickAction { icon: "💰", label: "Budget Travel", prompt: "Budget travel options" },
];

/// Display-only destination teaser. Prices are static text, not quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub flag: &'static str,
    pub name: &'static str,
    pub from_price_usd: u32,
}

impl Destination {
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("from ${}", self.from_price_usd)
    }
}

pub const DESTINATIONS: &[Destination] = &[
    Destination { flag: "🇫🇷", name: "Paris", from_price_usd: 599 },
    Destination { flag: "🇯🇵", name: "Tokyo", from_price_usd: 899 },
    Destination { flag: "🇮🇹", name: "Rome", from_price_usd: 549 },
    Destination { flag: "🇹🇭", name: "Bali", from_price_usd: 449 },
];

pub const TRAVEL_TIPS: &[&str] = &[
    "Book flights 2-3 months in advance",
    "Travel during shoulder season for better deals",
    "Check visa requirements early",
];

/// Everything the sidebar renders, as one serializable bundle.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Catalog {
    pub quick_actions: &'static [QuickAction],
    pub destinations: &'static [Destination],
    pub tips: &'static [&'static str],
}

pub const CATALOG: Catalog = Catalog { quick_actions: QUICK_ACTIONS, destinations: DESTINATIONS, tips: TRAVEL_TIPS };
