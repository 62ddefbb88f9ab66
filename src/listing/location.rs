use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair handed to the map preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Country selected by the location picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationValue {
    /// ISO 3166-1 alpha-2 code.
    pub value: String,
    pub label: String,
    pub flag: String,
    pub latlng: LatLng,
    pub region: String,
}

impl LocationValue {
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        flag: impl Into<String>,
        latlng: LatLng,
        region: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            flag: flag.into(),
            latlng,
            region: region.into(),
        }
    }

    /// Display form used by pickers, e.g. `🇵🇹 Portugal, Europe`.
    pub fn display(&self) -> String {
        format!("{} {}, {}", self.flag, self.label, self.region)
    }
}

/// Flag emoji for an ISO 3166-1 alpha-2 code, built from regional indicators.
pub fn flag_emoji(code: &str) -> String {
    code.chars()
        .filter(char::is_ascii_alphabetic)
        .filter_map(|ch| char::from_u32(0x1F1E6 + (ch.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}

static COUNTRIES: Lazy<Vec<LocationValue>> = Lazy::new(|| {
    [
        ("AF", "Afghanistan", 33.0, 65.0, "Asia"),
        ("AL", "Albania", 41.0, 20.0, "Europe"),
        ("DZ", "Algeria", 28.0, 3.0, "Africa"),
        ("AS", "American Samoa", -14.333333, -170.0, "Oceania"),
        ("AD", "Andorra", 42.5, 1.5, "Europe"),
        ("AO", "Angola", -12.5, 18.5, "Africa"),
        ("AI", "Anguilla", 18.25, -63.166667, "Americas"),
        ("AG", "Antigua and Barbuda", 17.05, -61.8, "Americas"),
        ("AR", "Argentina", -34.0, -64.0, "Americas"),
        ("AM", "Armenia", 40.0, 45.0, "Asia"),
        ("AW", "Aruba", 12.5, -69.966667, "Americas"),
        ("AU", "Australia", -27.0, 133.0, "Oceania"),
        ("AT", "Austria", 47.333333, 13.333333, "Europe"),
        ("AZ", "Azerbaijan", 40.5, 47.5, "Asia"),
        ("BS", "Bahamas", 24.25, -76.0, "Americas"),
        ("BH", "Bahrain", 26.0, 50.55, "Asia"),
        ("BD", "Bangladesh", 24.0, 90.0, "Asia"),
        ("BB", "Barbados", 13.166667, -59.533333, "Americas"),
        ("BY", "Belarus", 53.0, 28.0, "Europe"),
        ("BE", "Belgium", 50.833333, 4.0, "Europe"),
        ("BZ", "Belize", 17.25, -88.75, "Americas"),
        ("BJ", "Benin", 9.5, 2.25, "Africa"),
        ("BM", "Bermuda", 32.333333, -64.75, "Americas"),
        ("BT", "Bhutan", 27.5, 90.5, "Asia"),
        ("BO", "Bolivia", -17.0, -65.0, "Americas"),
        ("BA", "Bosnia and Herzegovina", 44.0, 18.0, "Europe"),
        ("BW", "Botswana", -22.0, 24.0, "Africa"),
        ("BR", "Brazil", -10.0, -55.0, "Americas"),
        ("VG", "British Virgin Islands", 18.431383, -64.62305, "Americas"),
        ("BN", "Brunei", 4.5, 114.666667, "Asia"),
        ("BG", "Bulgaria", 43.0, 25.0, "Europe"),
        ("BF", "Burkina Faso", 13.0, -2.0, "Africa"),
        ("BI", "Burundi", -3.5, 30.0, "Africa"),
        ("KH", "Cambodia", 13.0, 105.0, "Asia"),
        ("CM", "Cameroon", 6.0, 12.0, "Africa"),
        ("CA", "Canada", 60.0, -95.0, "Americas"),
        ("CV", "Cape Verde", 16.0, -24.0, "Africa"),
        ("KY", "Cayman Islands", 19.5, -80.5, "Americas"),
        ("CF", "Central African Republic", 7.0, 21.0, "Africa"),
        ("TD", "Chad", 15.0, 19.0, "Africa"),
        ("CL", "Chile", -30.0, -71.0, "Americas"),
        ("CN", "China", 35.0, 105.0, "Asia"),
        ("CO", "Colombia", 4.0, -72.0, "Americas"),
        ("KM", "Comoros", -12.166667, 44.25, "Africa"),
        ("CK", "Cook Islands", -21.233333, -159.766667, "Oceania"),
        ("CR", "Costa Rica", 10.0, -84.0, "Americas"),
        ("HR", "Croatia", 45.166667, 15.5, "Europe"),
        ("CU", "Cuba", 21.5, -80.0, "Americas"),
        ("CW", "Curaçao", 12.116667, -68.933333, "Americas"),
        ("CY", "Cyprus", 35.0, 33.0, "Europe"),
        ("CZ", "Czechia", 49.75, 15.5, "Europe"),
        ("CD", "DR Congo", 0.0, 25.0, "Africa"),
        ("DK", "Denmark", 56.0, 10.0, "Europe"),
        ("DJ", "Djibouti", 11.5, 43.0, "Africa"),
        ("DM", "Dominica", 15.416667, -61.333333, "Americas"),
        ("DO", "Dominican Republic", 19.0, -70.666667, "Americas"),
        ("EC", "Ecuador", -2.0, -77.5, "Americas"),
        ("EG", "Egypt", 27.0, 30.0, "Africa"),
        ("SV", "El Salvador", 13.833333, -88.916667, "Americas"),
        ("GQ", "Equatorial Guinea", 2.0, 10.0, "Africa"),
        ("ER", "Eritrea", 15.0, 39.0, "Africa"),
        ("EE", "Estonia", 59.0, 26.0, "Europe"),
        ("SZ", "Eswatini", -26.5, 31.5, "Africa"),
        ("ET", "Ethiopia", 8.0, 38.0, "Africa"),
        ("FK", "Falkland Islands", -51.75, -59.0, "Americas"),
        ("FO", "Faroe Islands", 62.0, -7.0, "Europe"),
        ("FJ", "Fiji", -18.0, 175.0, "Oceania"),
        ("FI", "Finland", 64.0, 26.0, "Europe"),
        ("FR", "France", 46.0, 2.0, "Europe"),
        ("GF", "French Guiana", 4.0, -53.0, "Americas"),
        ("PF", "French Polynesia", -15.0, -140.0, "Oceania"),
        ("GA", "Gabon", -1.0, 11.75, "Africa"),
        ("GM", "Gambia", 13.466667, -16.566667, "Africa"),
        ("GE", "Georgia", 42.0, 43.5, "Asia"),
        ("DE", "Germany", 51.0, 9.0, "Europe"),
        ("GH", "Ghana", 8.0, -2.0, "Africa"),
        ("GI", "Gibraltar", 36.133333, -5.35, "Europe"),
        ("GR", "Greece", 39.0, 22.0, "Europe"),
        ("GL", "Greenland", 72.0, -40.0, "Americas"),
        ("GD", "Grenada", 12.116667, -61.666667, "Americas"),
        ("GP", "Guadeloupe", 16.25, -61.583333, "Americas"),
        ("GU", "Guam", 13.466667, 144.783333, "Oceania"),
        ("GT", "Guatemala", 15.5, -90.25, "Americas"),
        ("GG", "Guernsey", 49.466667, -2.583333, "Europe"),
        ("GN", "Guinea", 11.0, -10.0, "Africa"),
        ("GW", "Guinea-Bissau", 12.0, -15.0, "Africa"),
        ("GY", "Guyana", 5.0, -59.0, "Americas"),
        ("HT", "Haiti", 19.0, -72.416667, "Americas"),
        ("HN", "Honduras", 15.0, -86.5, "Americas"),
        ("HK", "Hong Kong", 22.267, 114.188, "Asia"),
        ("HU", "Hungary", 47.0, 20.0, "Europe"),
        ("IS", "Iceland", 65.0, -18.0, "Europe"),
        ("IN", "India", 20.0, 77.0, "Asia"),
        ("ID", "Indonesia", -5.0, 120.0, "Asia"),
        ("IR", "Iran", 32.0, 53.0, "Asia"),
        ("IQ", "Iraq", 33.0, 44.0, "Asia"),
        ("IE", "Ireland", 53.0, -8.0, "Europe"),
        ("IM", "Isle of Man", 54.25, -4.5, "Europe"),
        ("IL", "Israel", 31.47, 35.13, "Asia"),
        ("IT", "Italy", 42.83, 12.83, "Europe"),
        ("CI", "Ivory Coast", 8.0, -5.0, "Africa"),
        ("JM", "Jamaica", 18.25, -77.5, "Americas"),
        ("JP", "Japan", 36.0, 138.0, "Asia"),
        ("JE", "Jersey", 49.25, -2.166667, "Europe"),
        ("JO", "Jordan", 31.0, 36.0, "Asia"),
        ("KZ", "Kazakhstan", 48.0, 68.0, "Asia"),
        ("KE", "Kenya", 1.0, 38.0, "Africa"),
        ("KI", "Kiribati", 1.416667, 173.0, "Oceania"),
        ("XK", "Kosovo", 42.666667, 21.166667, "Europe"),
        ("KW", "Kuwait", 29.5, 45.75, "Asia"),
        ("KG", "Kyrgyzstan", 41.0, 75.0, "Asia"),
        ("LA", "Laos", 18.0, 105.0, "Asia"),
        ("LV", "Latvia", 57.0, 25.0, "Europe"),
        ("LB", "Lebanon", 33.833333, 35.833333, "Asia"),
        ("LS", "Lesotho", -29.5, 28.5, "Africa"),
        ("LR", "Liberia", 6.5, -9.5, "Africa"),
        ("LY", "Libya", 25.0, 17.0, "Africa"),
        ("LI", "Liechtenstein", 47.266667, 9.533333, "Europe"),
        ("LT", "Lithuania", 56.0, 24.0, "Europe"),
        ("LU", "Luxembourg", 49.75, 6.166667, "Europe"),
        ("MO", "Macau", 22.166667, 113.55, "Asia"),
        ("MG", "Madagascar", -20.0, 47.0, "Africa"),
        ("MW", "Malawi", -13.5, 34.0, "Africa"),
        ("MY", "Malaysia", 2.5, 112.5, "Asia"),
        ("MV", "Maldives", 3.25, 73.0, "Asia"),
        ("ML", "Mali", 17.0, -4.0, "Africa"),
        ("MT", "Malta", 35.833333, 14.583333, "Europe"),
        ("MH", "Marshall Islands", 9.0, 168.0, "Oceania"),
        ("MQ", "Martinique", 14.666667, -61.0, "Americas"),
        ("MR", "Mauritania", 20.0, -12.0, "Africa"),
        ("MU", "Mauritius", -20.283333, 57.55, "Africa"),
        ("YT", "Mayotte", -12.833333, 45.166667, "Africa"),
        ("MX", "Mexico", 23.0, -102.0, "Americas"),
        ("FM", "Micronesia", 6.916667, 158.25, "Oceania"),
        ("MD", "Moldova", 47.0, 29.0, "Europe"),
        ("MC", "Monaco", 43.733333, 7.4, "Europe"),
        ("MN", "Mongolia", 46.0, 105.0, "Asia"),
        ("ME", "Montenegro", 42.5, 19.3, "Europe"),
        ("MS", "Montserrat", 16.75, -62.2, "Americas"),
        ("MA", "Morocco", 32.0, -5.0, "Africa"),
        ("MZ", "Mozambique", -18.25, 35.0, "Africa"),
        ("MM", "Myanmar", 22.0, 98.0, "Asia"),
        ("NA", "Namibia", -22.0, 17.0, "Africa"),
        ("NR", "Nauru", -0.533333, 166.916667, "Oceania"),
        ("NP", "Nepal", 28.0, 84.0, "Asia"),
        ("NL", "Netherlands", 52.5, 5.75, "Europe"),
        ("NC", "New Caledonia", -21.5, 165.5, "Oceania"),
        ("NZ", "New Zealand", -41.0, 174.0, "Oceania"),
        ("NI", "Nicaragua", 13.0, -85.0, "Americas"),
        ("NE", "Niger", 16.0, 8.0, "Africa"),
        ("NG", "Nigeria", 10.0, 8.0, "Africa"),
        ("NU", "Niue", -19.033333, -169.866667, "Oceania"),
        ("KP", "North Korea", 40.0, 127.0, "Asia"),
        ("MK", "North Macedonia", 41.833333, 22.0, "Europe"),
        ("MP", "Northern Mariana Islands", 15.2, 145.75, "Oceania"),
        ("NO", "Norway", 62.0, 10.0, "Europe"),
        ("OM", "Oman", 21.0, 57.0, "Asia"),
        ("PK", "Pakistan", 30.0, 70.0, "Asia"),
        ("PW", "Palau", 7.5, 134.5, "Oceania"),
        ("PS", "Palestine", 31.9, 35.2, "Asia"),
        ("PA", "Panama", 9.0, -80.0, "Americas"),
        ("PG", "Papua New Guinea", -6.0, 147.0, "Oceania"),
        ("PY", "Paraguay", -23.0, -58.0, "Americas"),
        ("PE", "Peru", -10.0, -76.0, "Americas"),
        ("PH", "Philippines", 13.0, 122.0, "Asia"),
        ("PL", "Poland", 52.0, 20.0, "Europe"),
        ("PT", "Portugal", 39.5, -8.0, "Europe"),
        ("PR", "Puerto Rico", 18.25, -66.5, "Americas"),
        ("QA", "Qatar", 25.5, 51.25, "Asia"),
        ("CG", "Republic of the Congo", -1.0, 15.0, "Africa"),
        ("RO", "Romania", 46.0, 25.0, "Europe"),
        ("RU", "Russia", 60.0, 100.0, "Europe"),
        ("RW", "Rwanda", -2.0, 30.0, "Africa"),
        ("RE", "Réunion", -21.15, 55.5, "Africa"),
        ("BL", "Saint Barthélemy", 18.5, -63.416667, "Americas"),
        ("KN", "Saint Kitts and Nevis", 17.333333, -62.75, "Americas"),
        ("LC", "Saint Lucia", 13.883333, -60.966667, "Americas"),
        ("MF", "Saint Martin", 18.083333, -63.95, "Americas"),
        ("VC", "Saint Vincent and the Grenadines", 13.25, -61.2, "Americas"),
        ("WS", "Samoa", -13.583333, -172.333333, "Oceania"),
        ("SM", "San Marino", 43.766667, 12.416667, "Europe"),
        ("SA", "Saudi Arabia", 25.0, 45.0, "Asia"),
        ("SN", "Senegal", 14.0, -14.0, "Africa"),
        ("RS", "Serbia", 44.0, 21.0, "Europe"),
        ("SC", "Seychelles", -4.583333, 55.666667, "Africa"),
        ("SL", "Sierra Leone", 8.5, -11.5, "Africa"),
        ("SG", "Singapore", 1.366667, 103.8, "Asia"),
        ("SX", "Sint Maarten", 18.033333, -63.05, "Americas"),
        ("SK", "Slovakia", 48.666667, 19.5, "Europe"),
        ("SI", "Slovenia", 46.116667, 14.816667, "Europe"),
        ("SB", "Solomon Islands", -8.0, 159.0, "Oceania"),
        ("SO", "Somalia", 10.0, 49.0, "Africa"),
        ("ZA", "South Africa", -29.0, 24.0, "Africa"),
        ("KR", "South Korea", 37.0, 127.5, "Asia"),
        ("SS", "South Sudan", 7.0, 30.0, "Africa"),
        ("ES", "Spain", 40.0, -4.0, "Europe"),
        ("LK", "Sri Lanka", 7.0, 81.0, "Asia"),
        ("SD", "Sudan", 15.0, 30.0, "Africa"),
        ("SR", "Suriname", 4.0, -56.0, "Americas"),
        ("SE", "Sweden", 62.0, 15.0, "Europe"),
        ("CH", "Switzerland", 47.0, 8.0, "Europe"),
        ("SY", "Syria", 35.0, 38.0, "Asia"),
        ("ST", "São Tomé and Príncipe", 1.0, 7.0, "Africa"),
        ("TW", "Taiwan", 23.5, 121.0, "Asia"),
        ("TJ", "Tajikistan", 39.0, 71.0, "Asia"),
        ("TZ", "Tanzania", -6.0, 35.0, "Africa"),
        ("TH", "Thailand", 15.0, 100.0, "Asia"),
        ("TL", "Timor-Leste", -8.833333, 125.916667, "Asia"),
        ("TG", "Togo", 8.0, 1.166667, "Africa"),
        ("TO", "Tonga", -20.0, -175.0, "Oceania"),
        ("TT", "Trinidad and Tobago", 11.0, -61.0, "Americas"),
        ("TN", "Tunisia", 34.0, 9.0, "Africa"),
        ("TR", "Turkey", 39.0, 35.0, "Asia"),
        ("TM", "Turkmenistan", 40.0, 60.0, "Asia"),
        ("TC", "Turks and Caicos Islands", 21.75, -71.583333, "Americas"),
        ("TV", "Tuvalu", -8.0, 178.0, "Oceania"),
        ("UG", "Uganda", 1.0, 32.0, "Africa"),
        ("UA", "Ukraine", 49.0, 32.0, "Europe"),
        ("AE", "United Arab Emirates", 24.0, 54.0, "Asia"),
        ("GB", "United Kingdom", 54.0, -2.0, "Europe"),
        ("US", "United States", 38.0, -97.0, "Americas"),
        ("VI", "United States Virgin Islands", 18.35, -64.933333, "Americas"),
        ("UY", "Uruguay", -33.0, -56.0, "Americas"),
        ("UZ", "Uzbekistan", 41.0, 64.0, "Asia"),
        ("VU", "Vanuatu", -16.0, 167.0, "Oceania"),
        ("VA", "Vatican City", 41.9, 12.45, "Europe"),
        ("VE", "Venezuela", 8.0, -66.0, "Americas"),
        ("VN", "Vietnam", 16.166667, 107.833333, "Asia"),
        ("EH", "Western Sahara", 24.5, -13.0, "Africa"),
        ("YE", "Yemen", 15.0, 48.0, "Asia"),
        ("ZM", "Zambia", -15.0, 30.0, "Africa"),
        ("ZW", "Zimbabwe", -20.0, 30.0, "Africa"),
        ("AX", "Åland Islands", 60.116667, 19.9, "Europe"),
    ]
    .into_iter()
    .map(|(code, label, lat, lng, region)| {
        LocationValue::new(code, label, flag_emoji(code), LatLng::new(lat, lng), region)
    })
    .collect()
});

/// Countries offered by the built-in location picker.
pub fn countries() -> &'static [LocationValue] {
    &COUNTRIES
}

/// Finds a country by ISO code or label, case-insensitively.
pub fn find_country(query: &str) -> Option<&'static LocationValue> {
    let needle = query.trim();
    countries().iter().find(|country| {
        country.value.eq_ignore_ascii_case(needle) || country.label.eq_ignore_ascii_case(needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_code_or_label() {
        assert_eq!(find_country("pt").map(|c| c.label.as_str()), Some("Portugal"));
        assert_eq!(
            find_country(" united states ").map(|c| c.value.as_str()),
            Some("US")
        );
        assert!(find_country("Atlantis").is_none());
    }

    #[test]
    fn catalog_covers_the_world_with_unique_codes() {
        assert!(countries().len() > 200);
        let mut codes: Vec<_> = countries().iter().map(|c| c.value.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), countries().len());
        for country in countries() {
            assert!((-90.0..=90.0).contains(&country.latlng.lat), "{}", country.label);
            assert!((-180.0..=180.0).contains(&country.latlng.lng), "{}", country.label);
        }
        assert_eq!(
            find_country("vn").map(|c| (c.label.as_str(), c.region.as_str())),
            Some(("Vietnam", "Asia"))
        );
    }

    #[test]
    fn flags_come_from_regional_indicators() {
        assert_eq!(flag_emoji("pt"), "🇵🇹");
        assert_eq!(find_country("Japan").map(|c| c.flag.as_str()), Some("🇯🇵"));
    }
}
