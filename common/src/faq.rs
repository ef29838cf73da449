use serde::Serialize;

use crate::content::{Displayable, Link};

/// A question/answer record shown on the FAQ page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub title: &'static str,
    /// Answer text; `\n` separates lines.
    pub content: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<&'static [Link]>,
}

impl Displayable for FaqEntry {
    fn title(&self) -> &str {
        self.title
    }

    fn body(&self) -> &str {
        self.content
    }

    fn links(&self) -> Option<&[Link]> {
        self.links
    }
}

const CARBON_CALCULATOR_ARTICLE: &str = "https://www.theguardian.com/environment/ng-interactive/2019/jul/19/carbon-calculator-how-taking-one-flight-emits-as-much-as-many-people-do-in-a-year";

/// FAQ entries in display order.
pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        title: "What is the goal of this page?",
        content: "This page allows users to visualize and explore carbon emissions generated by flights in specific airspaces and by specific aircrafts. With this dashboard, you can gain insights into the environmental impact of air traffic and monitor carbon emissions over time.",
        links: None,
    },
    FaqEntry {
        title: "Where does the data come from?",
        content: "The data is sourced from the OpenSky API, which provides access to state vectors in airspaces and flight data. It offers a comprehensive set of information related to aircraft positions, velocities, and other relevant data points.",
        links: None,
    },
    FaqEntry {
        title: "How accurate is the data?",
        content: "Many estimations and assumptions are made (airplanes leave the airspace in a straight path, a constant speed of 700 km/h is assumed for distance calculations with Celebs, fuel consumption is estimated based on the aircraft type, etc.). Therefore, there is no guarantee of the correctness and accuracy of the data.\nThe calculation process involves obtaining state vectors, which are then used to calculate aircraft flight paths. Subsequently, the CO2 emissions are estimated based on the aircraft type, utilizing the Flight Fuel Consumption API.",
        links: None,
    },
    FaqEntry {
        title: "How often does the data update?",
        content: "The data updates at specific intervals as follows:\n- Airspace statistics are refreshed every minute.\n- The airspace chart is updated on an hourly basis.\n- The celebrity leaderboard is updated daily.",
        links: None,
    },
    FaqEntry {
        title: "How does the data compare?",
        content: "This can be answered with the following citation:\n\"According to figures from German nonprofit Atmosfair, flying from London to New York and back generates about 986kg of CO2 per passenger. There are 56 countries where the average person emits less carbon dioxide in a whole year \u{2013} from Burundi in Africa to Paraguay in South America.\nBut even a relatively short return trip from London to Rome carries a carbon footprint of 234kg of CO2 per passenger \u{2013} more than the average produced by citizens of 17 countries annually.\"",
        links: Some(&[Link {
            title: "Source",
            link: CARBON_CALCULATOR_ARTICLE,
        }]),
    },
];

/// The FAQ content source.
pub fn faq_entries() -> &'static [FaqEntry] {
    FAQ_ENTRIES
}
