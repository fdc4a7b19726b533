//! src/test_utils.rs
use crate::functions::{RawInteraction, Revenue};
use std::path::PathBuf;

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn revenue(amount: &str) -> Revenue {
    amount.parse().expect("Invalid revenue")
}

/// The search-referred rows of `tests/data/data.tsv`, in file order.
pub fn sample_interactions() -> Vec<RawInteraction> {
    vec![
        RawInteraction::new(
            "",
            "http://www.google.com/search?hl=en&client=firefox-a&rls=org.mozilla%3Aen-US%3Aofficial&hs=ZzP&q=Ipod&aq=f&oq=&aqi=",
        ),
        RawInteraction::new(
            "Electronics;Ipod - Nano - 8GB;1;190;",
            "http://www.google.com/search?hl=en&client=firefox-a&rls=org.mozilla%3Aen-US%3Aofficial&hs=ZzP&q=Ipod&aq=f&oq=&aqi=",
        ),
        RawInteraction::new(
            "Electronics;Zune - 32GB;1;250;",
            "http://www.bing.com/search?q=Zune&go=&form=QBLH&qs=n",
        ),
        RawInteraction::new(
            "Electronics;Cd Player;1;;",
            "http://search.yahoo.com/search?p=cd+player&toggle=1&cop=mss&ei=UTF-8&fr=yfp-t-701",
        ),
        RawInteraction::new(
            "Electronics;Ipod - Touch - 32GB;1;290;,Electronics;Ipod Case;2;10.50;",
            "http://www.google.com/search?hl=en&q=Ipod&aq=f",
        ),
        RawInteraction::new(
            "Electronics;Ipod - Touch - 32GB;1;1000;",
            "http://www.esshopzilla.com/search/?k=Ipod",
        ),
        RawInteraction::new("", "http://www.bing.com/search?q=Zune&form=QBRE"),
    ]
}
