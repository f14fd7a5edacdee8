//! Static symbol catalog used when the quote provider has nothing useful.
//!
//! Covers the Korean ETFs and large US funds users save most often. Entries
//! here carry no price; a catalog hit still produces a well-formed quote.

/// Exchanges accepted verbatim for Korean listings. Anything else the
/// provider reports is normalized to KRX.
pub const KOREAN_EXCHANGES: &[&str] = &["KRX", "KOSPI", "KOSDAQ"];

const KOREAN_ETF_NAMES: &[(&str, &str)] = &[
    ("069500", "KODEX 200"),
    ("114800", "KODEX 인버스"),
    ("251350", "KODEX 코스닥150"),
    ("102110", "TIGER 200"),
    ("148070", "KOSEF 국고채10년"),
    ("233740", "KODEX 코스닥150 레버리지"),
    ("251340", "KODEX 코스닥150선물인버스"),
    ("122630", "KODEX 레버리지"),
    ("279530", "KODEX 3X 인버스"),
    ("308620", "KODEX 미국달러선물"),
    ("182490", "TIGER 200 IT"),
    ("091180", "KODEX 은행"),
    ("091170", "KODEX 은행 인버스"),
    ("229200", "KODEX 코스닥150 IT"),
    ("152100", "TIGER 200 건설"),
    ("169950", "KODEX 200 선물인버스2X"),
];

pub fn korean_etf_name(symbol: &str) -> Option<&'static str> {
    KOREAN_ETF_NAMES
        .iter()
        .find(|(code, _)| *code == symbol)
        .map(|(_, name)| *name)
}

pub struct FamousEtf {
    pub name: &'static str,
    pub exchange: &'static str,
    pub country: &'static str,
}

const FAMOUS_ETFS: &[(&str, FamousEtf)] = &[
    ("SPY", FamousEtf { name: "SPDR S&P 500 ETF Trust", exchange: "ARCA", country: "US" }),
    ("QQQ", FamousEtf { name: "Invesco QQQ Trust", exchange: "NASDAQ", country: "US" }),
    ("VTI", FamousEtf { name: "Vanguard Total Stock Market ETF", exchange: "ARCA", country: "US" }),
    ("VOO", FamousEtf { name: "Vanguard S&P 500 ETF", exchange: "ARCA", country: "US" }),
    ("IVV", FamousEtf { name: "iShares Core S&P 500 ETF", exchange: "ARCA", country: "US" }),
    ("VEA", FamousEtf { name: "Vanguard FTSE Developed Markets ETF", exchange: "ARCA", country: "US" }),
    ("VWO", FamousEtf { name: "Vanguard FTSE Emerging Markets ETF", exchange: "ARCA", country: "US" }),
    ("BND", FamousEtf { name: "Vanguard Total Bond Market ETF", exchange: "NASDAQ", country: "US" }),
    ("AGG", FamousEtf { name: "iShares Core U.S. Aggregate Bond ETF", exchange: "ARCA", country: "US" }),
    ("GLD", FamousEtf { name: "SPDR Gold Shares", exchange: "ARCA", country: "US" }),
    ("SCHD", FamousEtf { name: "Schwab US Dividend Equity ETF", exchange: "ARCA", country: "US" }),
    ("VYM", FamousEtf { name: "Vanguard High Dividend Yield ETF", exchange: "ARCA", country: "US" }),
    ("VXUS", FamousEtf { name: "Vanguard Total International Stock ETF", exchange: "NASDAQ", country: "US" }),
    ("IEFA", FamousEtf { name: "iShares Core MSCI EAFE IMI Index ETF", exchange: "ARCA", country: "US" }),
    ("IEMG", FamousEtf { name: "iShares Core MSCI Emerging Markets IMI Index ETF", exchange: "ARCA", country: "US" }),
];

pub fn famous_etf(symbol: &str) -> Option<&'static FamousEtf> {
    FAMOUS_ETFS
        .iter()
        .find(|(code, _)| *code == symbol)
        .map(|(_, etf)| etf)
}

/// Maps a provider-reported exchange code to an ISO country code.
/// Unrecognized exchanges are assumed to be US venues.
pub fn country_for_exchange(exchange: &str) -> &'static str {
    match exchange {
        "LSE" | "LON" => "GB",
        "TSE" | "TYO" => "JP",
        "ETR" | "FRA" => "DE",
        "EPA" | "PAR" => "FR",
        "AMS" => "NL",
        "SWX" => "CH",
        "TSX" => "CA",
        "ASX" => "AU",
        "HKG" => "HK",
        "SHA" | "SHE" => "CN",
        _ => "US",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_catalog_lookup() {
        assert_eq!(korean_etf_name("069500"), Some("KODEX 200"));
        assert_eq!(korean_etf_name("102110"), Some("TIGER 200"));
        assert_eq!(korean_etf_name("000000"), None);
    }

    #[test]
    fn test_famous_etf_lookup() {
        let spy = famous_etf("SPY").unwrap();
        assert_eq!(spy.name, "SPDR S&P 500 ETF Trust");
        assert_eq!(spy.exchange, "ARCA");

        assert!(famous_etf("ZZZT").is_none());
    }

    #[test]
    fn test_country_for_exchange_defaults_to_us() {
        assert_eq!(country_for_exchange("LSE"), "GB");
        assert_eq!(country_for_exchange("TYO"), "JP");
        assert_eq!(country_for_exchange("HKG"), "HK");
        assert_eq!(country_for_exchange("ARCA"), "US");
        assert_eq!(country_for_exchange(""), "US");
    }
}
