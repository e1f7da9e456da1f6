use url::form_urlencoded::byte_serialize;

const EBAY_SEARCH_URL: &str = "https://www.ebay.com/sch/i.html";
/// Keywords that keep slabbed cards out of a raw-listing search.
const EXCLUDED_CONDITIONS: [&str; 4] = ["graded", "psa", "bgs", "sgc"];
/// eBay sort order: price + shipping, lowest first.
const SORT_LOWEST_TOTAL: &str = "15";

/// eBay Partner Network search link for ungraded listings of `item_label`.
pub fn ebay_search_link(item_label: &str, campaign_id: &str) -> String {
    let exclusions = EXCLUDED_CONDITIONS
        .iter()
        .map(|keyword| format!("-{keyword}"))
        .collect::<Vec<_>>()
        .join(" ");
    let keywords = format!("\"{}\" {exclusions}", item_label.trim());

    format!(
        "{EBAY_SEARCH_URL}?_nkw={}&_sop={SORT_LOWEST_TOTAL}&rt=nc&campid={}",
        form_encode(&keywords),
        form_encode(campaign_id.trim()),
    )
}

fn form_encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_link_quotes_label_and_excludes_graded() {
        let link = ebay_search_link("Michael Jordan 1986 Fleer #57", "5338000000");
        assert_eq!(
            link,
            "https://www.ebay.com/sch/i.html?_nkw=%22Michael+Jordan+1986+Fleer+%2357%22+-graded+-psa+-bgs+-sgc&_sop=15&rt=nc&campid=5338000000"
        );
    }

    #[test]
    fn test_link_round_trips_through_url_parser() {
        let link = ebay_search_link("Pokémon Charizard & Friends", "my campaign");
        let parsed = Url::parse(&link).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs[0],
            (
                "_nkw".to_string(),
                "\"Pokémon Charizard & Friends\" -graded -psa -bgs -sgc".to_string()
            )
        );
        assert_eq!(pairs[1], ("_sop".to_string(), "15".to_string()));
        assert_eq!(pairs[3], ("campid".to_string(), "my campaign".to_string()));
    }
}
