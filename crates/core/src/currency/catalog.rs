//! Built-in currency catalog.
//!
//! ISO 4217 currencies plus withdrawn ones that still turn up in historic
//! data. This table is the only source of rounding and display metadata; the
//! registry seeds itself from it.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::types::MinorUnit;

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Alphabetic code.
    pub code: &'static str,
    /// Numeric code.
    pub numeric_code: &'static str,
    /// Minor unit granularity.
    pub minor_unit: MinorUnit,
    /// English name.
    pub english_name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Withdrawn from circulation.
    pub is_obsolete: bool,
    valid_from: Option<(i32, u32, u32)>,
    valid_to: Option<(i32, u32, u32)>,
}

impl CatalogEntry {
    /// First day of validity.
    #[must_use]
    pub fn valid_from(&self) -> Option<NaiveDate> {
        self.valid_from
            .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }

    /// Last day of validity.
    #[must_use]
    pub fn valid_to(&self) -> Option<NaiveDate> {
        self.valid_to.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }
}

const D0: MinorUnit = MinorUnit::Digits(0);
const D2: MinorUnit = MinorUnit::Digits(2);
const D3: MinorUnit = MinorUnit::Digits(3);
const D4: MinorUnit = MinorUnit::Digits(4);
const NA: MinorUnit = MinorUnit::NotApplicable;
const Z5: MinorUnit = MinorUnit::FiveSubunit;

const fn current(
    code: &'static str,
    numeric_code: &'static str,
    minor_unit: MinorUnit,
    english_name: &'static str,
    symbol: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        code,
        numeric_code,
        minor_unit,
        english_name,
        symbol,
        is_obsolete: false,
        valid_from: None,
        valid_to: None,
    }
}

const fn since(entry: CatalogEntry, from: (i32, u32, u32)) -> CatalogEntry {
    CatalogEntry {
        valid_from: Some(from),
        ..entry
    }
}

const fn withdrawn(entry: CatalogEntry, to: (i32, u32, u32)) -> CatalogEntry {
    CatalogEntry {
        is_obsolete: true,
        valid_to: Some(to),
        ..entry
    }
}

/// The "no currency" placeholder.
pub const NO_CURRENCY: CatalogEntry = current("XXX", "999", NA, "No currency", "¤");

/// Every built-in currency.
pub static CATALOG: &[CatalogEntry] = &[
    current("AED", "784", D2, "United Arab Emirates dirham", "د.إ"),
    current("AFN", "971", D2, "Afghan afghani", "؋"),
    current("ALL", "008", D2, "Albanian lek", "L"),
    current("AMD", "051", D2, "Armenian dram", "֏"),
    withdrawn(
        current("ANG", "532", D2, "Netherlands Antillean guilder", "ƒ"),
        (2025, 3, 31),
    ),
    current("AOA", "973", D2, "Angolan kwanza", "Kz"),
    current("ARS", "032", D2, "Argentine peso", "$"),
    current("AUD", "036", D2, "Australian dollar", "$"),
    current("AWG", "533", D2, "Aruban florin", "ƒ"),
    current("AZN", "944", D2, "Azerbaijani manat", "₼"),
    current("BAM", "977", D2, "Bosnia and Herzegovina convertible mark", "KM"),
    current("BBD", "052", D2, "Barbados dollar", "$"),
    current("BDT", "050", D2, "Bangladeshi taka", "৳"),
    current("BGN", "975", D2, "Bulgarian lev", "лв."),
    current("BHD", "048", D3, "Bahraini dinar", "BD"),
    current("BIF", "108", D0, "Burundian franc", "FBu"),
    current("BMD", "060", D2, "Bermudian dollar", "$"),
    current("BND", "096", D2, "Brunei dollar", "$"),
    current("BOB", "068", D2, "Boliviano", "Bs."),
    current("BOV", "984", D2, "Bolivian Mvdol (funds code)", "¤"),
    current("BRL", "986", D2, "Brazilian real", "R$"),
    current("BSD", "044", D2, "Bahamian dollar", "$"),
    current("BTN", "064", D2, "Bhutanese ngultrum", "Nu."),
    current("BWP", "072", D2, "Botswana pula", "P"),
    since(current("BYN", "933", D2, "Belarusian ruble", "Br"), (2016, 7, 1)),
    current("BZD", "084", D2, "Belize dollar", "BZ$"),
    current("CAD", "124", D2, "Canadian dollar", "$"),
    current("CDF", "976", D2, "Congolese franc", "FC"),
    current("CHE", "947", D2, "WIR Euro (complementary currency)", "¤"),
    current("CHF", "756", D2, "Swiss franc", "CHF"),
    current("CHW", "948", D2, "WIR Franc (complementary currency)", "¤"),
    current("CLF", "990", D4, "Unidad de Fomento (funds code)", "UF"),
    current("CLP", "152", D0, "Chilean peso", "$"),
    current("CNY", "156", D2, "Chinese yuan", "¥"),
    current("COP", "170", D2, "Colombian peso", "$"),
    current("COU", "970", D2, "Unidad de Valor Real", "¤"),
    current("CRC", "188", D2, "Costa Rican colon", "₡"),
    current("CUC", "931", D2, "Cuban convertible peso", "CUC$"),
    current("CUP", "192", D2, "Cuban peso", "$"),
    current("CVE", "132", D2, "Cape Verde escudo", "$"),
    current("CZK", "203", D2, "Czech koruna", "Kč"),
    current("DJF", "262", D0, "Djiboutian franc", "Fdj"),
    current("DKK", "208", D2, "Danish krone", "kr."),
    current("DOP", "214", D2, "Dominican peso", "RD$"),
    current("DZD", "012", D2, "Algerian dinar", "DA"),
    current("EGP", "818", D2, "Egyptian pound", "LE"),
    current("ERN", "232", D2, "Eritrean nakfa", "Nfk"),
    current("ETB", "230", D2, "Ethiopian birr", "Br"),
    since(current("EUR", "978", D2, "Euro", "€"), (1999, 1, 1)),
    current("FJD", "242", D2, "Fiji dollar", "$"),
    current("FKP", "238", D2, "Falkland Islands pound", "£"),
    current("GBP", "826", D2, "British pound", "£"),
    current("GEL", "981", D2, "Georgian lari", "₾"),
    since(current("GHS", "936", D2, "Ghanaian cedi", "GH₵"), (2007, 7, 1)),
    current("GIP", "292", D2, "Gibraltar pound", "£"),
    current("GMD", "270", D2, "Gambian dalasi", "D"),
    current("GNF", "324", D0, "Guinean franc", "FG"),
    current("GTQ", "320", D2, "Guatemalan quetzal", "Q"),
    current("GYD", "328", D2, "Guyanese dollar", "$"),
    current("HKD", "344", D2, "Hong Kong dollar", "HK$"),
    current("HNL", "340", D2, "Honduran lempira", "L"),
    current("HTG", "332", D2, "Haitian gourde", "G"),
    current("HUF", "348", D2, "Hungarian forint", "Ft"),
    current("IDR", "360", D2, "Indonesian rupiah", "Rp"),
    current("ILS", "376", D2, "Israeli new shekel", "₪"),
    current("INR", "356", D2, "Indian rupee", "₹"),
    current("IQD", "368", D3, "Iraqi dinar", "ع.د"),
    current("IRR", "364", D2, "Iranian rial", "﷼"),
    current("ISK", "352", D0, "Icelandic króna", "kr"),
    current("JMD", "388", D2, "Jamaican dollar", "J$"),
    current("JOD", "400", D3, "Jordanian dinar", "JD"),
    current("JPY", "392", D0, "Japanese yen", "¥"),
    current("KES", "404", D2, "Kenyan shilling", "KSh"),
    current("KGS", "417", D2, "Kyrgyzstani som", "сом"),
    current("KHR", "116", D2, "Cambodian riel", "៛"),
    current("KMF", "174", D0, "Comoro franc", "CF"),
    current("KPW", "408", D2, "North Korean won", "₩"),
    current("KRW", "410", D0, "South Korean won", "₩"),
    current("KWD", "414", D3, "Kuwaiti dinar", "KD"),
    current("KYD", "136", D2, "Cayman Islands dollar", "$"),
    current("KZT", "398", D2, "Kazakhstani tenge", "₸"),
    current("LAK", "418", D2, "Lao kip", "₭"),
    current("LBP", "422", D2, "Lebanese pound", "ل.ل"),
    current("LKR", "144", D2, "Sri Lankan rupee", "Rs"),
    current("LRD", "430", D2, "Liberian dollar", "$"),
    current("LSL", "426", D2, "Lesotho loti", "L"),
    current("LYD", "434", D3, "Libyan dinar", "LD"),
    current("MAD", "504", D2, "Moroccan dirham", "د.م."),
    current("MDL", "498", D2, "Moldovan leu", "L"),
    since(current("MGA", "969", Z5, "Malagasy ariary", "Ar"), (2005, 1, 1)),
    current("MKD", "807", D2, "Macedonian denar", "ден"),
    current("MMK", "104", D2, "Myanmar kyat", "K"),
    current("MNT", "496", D2, "Mongolian tögrög", "₮"),
    current("MOP", "446", D2, "Macanese pataca", "MOP$"),
    since(current("MRU", "929", Z5, "Mauritanian ouguiya", "UM"), (2018, 1, 1)),
    current("MUR", "480", D2, "Mauritian rupee", "Rs"),
    current("MVR", "462", D2, "Maldivian rufiyaa", "Rf"),
    current("MWK", "454", D2, "Malawian kwacha", "MK"),
    current("MXN", "484", D2, "Mexican peso", "$"),
    current("MXV", "979", D2, "Mexican Unidad de Inversion (funds code)", "¤"),
    current("MYR", "458", D2, "Malaysian ringgit", "RM"),
    since(current("MZN", "943", D2, "Mozambican metical", "MTn"), (2006, 7, 1)),
    current("NAD", "516", D2, "Namibian dollar", "N$"),
    current("NGN", "566", D2, "Nigerian naira", "₦"),
    current("NIO", "558", D2, "Nicaraguan córdoba", "C$"),
    current("NOK", "578", D2, "Norwegian krone", "kr"),
    current("NPR", "524", D2, "Nepalese rupee", "Rs"),
    current("NZD", "554", D2, "New Zealand dollar", "$"),
    current("OMR", "512", D3, "Omani rial", "ر.ع."),
    current("PAB", "590", D2, "Panamanian balboa", "B/."),
    current("PEN", "604", D2, "Peruvian sol", "S/."),
    current("PGK", "598", D2, "Papua New Guinean kina", "K"),
    current("PHP", "608", D2, "Philippine peso", "₱"),
    current("PKR", "586", D2, "Pakistani rupee", "Rs"),
    current("PLN", "985", D2, "Polish złoty", "zł"),
    current("PYG", "600", D0, "Paraguayan guaraní", "₲"),
    current("QAR", "634", D2, "Qatari riyal", "QR"),
    since(current("RON", "946", D2, "Romanian leu", "lei"), (2005, 7, 1)),
    since(current("RSD", "941", D2, "Serbian dinar", "дин."), (2006, 10, 25)),
    current("RUB", "643", D2, "Russian ruble", "₽"),
    current("RWF", "646", D0, "Rwandan franc", "FRw"),
    current("SAR", "682", D2, "Saudi riyal", "﷼"),
    current("SBD", "090", D2, "Solomon Islands dollar", "SI$"),
    current("SCR", "690", D2, "Seychelles rupee", "SR"),
    current("SDG", "938", D2, "Sudanese pound", "£"),
    current("SEK", "752", D2, "Swedish krona", "kr"),
    current("SGD", "702", D2, "Singapore dollar", "S$"),
    current("SHP", "654", D2, "Saint Helena pound", "£"),
    since(current("SLE", "925", D2, "Sierra Leonean leone", "Le"), (2022, 4, 1)),
    current("SOS", "706", D2, "Somali shilling", "Sh"),
    current("SRD", "968", D2, "Surinamese dollar", "$"),
    current("SSP", "728", D2, "South Sudanese pound", "£"),
    since(current("STN", "930", D2, "São Tomé and Príncipe dobra", "Db"), (2018, 1, 1)),
    current("SVC", "222", D2, "Salvadoran colón", "₡"),
    current("SYP", "760", D2, "Syrian pound", "£"),
    current("SZL", "748", D2, "Swazi lilangeni", "E"),
    current("THB", "764", D2, "Thai baht", "฿"),
    current("TJS", "972", D2, "Tajikistani somoni", "SM"),
    since(current("TMT", "934", D2, "Turkmenistan manat", "m"), (2009, 1, 1)),
    current("TND", "788", D3, "Tunisian dinar", "DT"),
    current("TOP", "776", D2, "Tongan paʻanga", "T$"),
    since(current("TRY", "949", D2, "Turkish lira", "₺"), (2005, 1, 1)),
    current("TTD", "780", D2, "Trinidad and Tobago dollar", "TT$"),
    current("TWD", "901", D2, "New Taiwan dollar", "NT$"),
    current("TZS", "834", D2, "Tanzanian shilling", "TSh"),
    current("UAH", "980", D2, "Ukrainian hryvnia", "₴"),
    current("UGX", "800", D0, "Ugandan shilling", "USh"),
    current("USD", "840", D2, "United States dollar", "$"),
    current("USN", "997", D2, "United States dollar (next day) (funds code)", "$"),
    current("UYI", "940", D0, "Uruguay Peso en Unidades Indexadas (funds code)", "¤"),
    current("UYU", "858", D2, "Uruguayan peso", "$"),
    since(current("UYW", "927", D4, "Unidad previsional", "¤"), (2018, 8, 29)),
    current("UZS", "860", D2, "Uzbekistan som", "so'm"),
    since(current("VED", "926", D2, "Venezuelan digital bolívar", "Bs.D"), (2021, 10, 1)),
    since(current("VES", "928", D2, "Venezuelan sovereign bolívar", "Bs.S"), (2018, 8, 20)),
    current("VND", "704", D0, "Vietnamese đồng", "₫"),
    current("VUV", "548", D0, "Vanuatu vatu", "VT"),
    current("WST", "882", D2, "Samoan tala", "WS$"),
    current("XAF", "950", D0, "CFA franc BEAC", "FCFA"),
    current("XAG", "961", NA, "Silver (one troy ounce)", "¤"),
    current("XAU", "959", NA, "Gold (one troy ounce)", "¤"),
    current("XBA", "955", NA, "European Composite Unit (EURCO) (bond market unit)", "¤"),
    current("XBB", "956", NA, "European Monetary Unit (E.M.U.-6) (bond market unit)", "¤"),
    current("XBC", "957", NA, "European Unit of Account 9 (E.U.A.-9) (bond market unit)", "¤"),
    current("XBD", "958", NA, "European Unit of Account 17 (E.U.A.-17) (bond market unit)", "¤"),
    current("XCD", "951", D2, "East Caribbean dollar", "$"),
    since(current("XCG", "532", D2, "Caribbean guilder", "Cg"), (2025, 3, 31)),
    current("XDR", "960", NA, "Special drawing rights", "¤"),
    current("XOF", "952", D0, "CFA franc BCEAO", "CFA"),
    current("XPD", "964", NA, "Palladium (one troy ounce)", "¤"),
    current("XPF", "953", D0, "CFP franc", "F"),
    current("XPT", "962", NA, "Platinum (one troy ounce)", "¤"),
    current("XSU", "994", NA, "SUCRE", "¤"),
    current("XTS", "963", NA, "Code reserved for testing purposes", "¤"),
    current("XUA", "965", NA, "ADB Unit of Account", "¤"),
    NO_CURRENCY,
    current("YER", "886", D2, "Yemeni rial", "﷼"),
    current("ZAR", "710", D2, "South African rand", "R"),
    since(current("ZMW", "967", D2, "Zambian kwacha", "ZK"), (2013, 1, 1)),
    since(current("ZWG", "924", D2, "Zimbabwe Gold", "ZiG"), (2024, 6, 25)),
    withdrawn(
        since(current("ZWL", "932", D2, "Zimbabwean dollar", "$"), (2009, 2, 2)),
        (2024, 9, 1),
    ),
    // Withdrawn currencies
    withdrawn(current("ATS", "040", D2, "Austrian schilling", "öS"), (2001, 12, 31)),
    withdrawn(current("AZM", "031", D2, "Azerbaijani manat", "man."), (2005, 12, 31)),
    withdrawn(current("BEF", "056", D0, "Belgian franc", "fr."), (2001, 12, 31)),
    withdrawn(current("BYR", "974", D0, "Belarusian ruble", "p."), (2016, 6, 30)),
    withdrawn(current("CSD", "891", D2, "Serbian dinar", "дин."), (2006, 10, 31)),
    withdrawn(current("CYP", "196", D2, "Cypriot pound", "£"), (2007, 12, 31)),
    withdrawn(
        since(current("DEM", "276", D2, "German mark", "DM"), (1948, 6, 20)),
        (2001, 12, 31),
    ),
    withdrawn(current("EEK", "233", D2, "Estonian kroon", "kr"), (2010, 12, 31)),
    withdrawn(current("ESP", "724", D0, "Spanish peseta", "₧"), (2001, 12, 31)),
    withdrawn(current("FIM", "246", D2, "Finnish markka", "mk"), (2001, 12, 31)),
    withdrawn(
        since(current("FRF", "250", D2, "French franc", "F"), (1960, 1, 1)),
        (2001, 12, 31),
    ),
    withdrawn(current("GHC", "288", D2, "Ghanaian cedi", "₵"), (2007, 6, 30)),
    withdrawn(current("GRD", "300", D0, "Greek drachma", "₯"), (2001, 12, 31)),
    withdrawn(current("HRK", "191", D2, "Croatian kuna", "kn"), (2022, 12, 31)),
    withdrawn(current("IEP", "372", D2, "Irish pound", "£"), (2001, 12, 31)),
    withdrawn(current("ITL", "380", D0, "Italian lira", "₤"), (2001, 12, 31)),
    withdrawn(current("LTL", "440", D2, "Lithuanian litas", "Lt"), (2014, 12, 31)),
    withdrawn(current("LUF", "442", D0, "Luxembourg franc", "F"), (2001, 12, 31)),
    withdrawn(current("LVL", "428", D2, "Latvian lats", "Ls"), (2013, 12, 31)),
    withdrawn(current("MGF", "450", D0, "Malagasy franc", "FMG"), (2004, 12, 31)),
    withdrawn(
        since(current("MRO", "478", Z5, "Mauritanian ouguiya", "UM"), (1973, 6, 29)),
        (2017, 12, 31),
    ),
    withdrawn(current("MTL", "470", D2, "Maltese lira", "₤"), (2007, 12, 31)),
    withdrawn(current("MZM", "508", D2, "Mozambican metical", "MT"), (2006, 6, 30)),
    withdrawn(current("NLG", "528", D2, "Dutch guilder", "ƒ"), (2001, 12, 31)),
    withdrawn(current("PTE", "620", D0, "Portuguese escudo", "Esc"), (2001, 12, 31)),
    withdrawn(current("ROL", "642", D2, "Romanian leu", "L"), (2005, 6, 30)),
    withdrawn(current("SIT", "705", D2, "Slovenian tolar", "SIT"), (2006, 12, 31)),
    withdrawn(current("SKK", "703", D2, "Slovak koruna", "Sk"), (2008, 12, 31)),
    withdrawn(current("SLL", "694", D2, "Sierra Leonean leone", "Le"), (2023, 12, 31)),
    withdrawn(current("SRG", "740", D2, "Suriname guilder", "ƒ"), (2003, 12, 31)),
    withdrawn(current("STD", "678", D2, "São Tomé and Príncipe dobra", "Db"), (2017, 12, 31)),
    withdrawn(current("TMM", "795", D0, "Turkmenistani manat", "T"), (2008, 12, 31)),
    withdrawn(current("TRL", "792", D0, "Turkish lira", "TL"), (2005, 12, 31)),
    withdrawn(current("VEB", "862", D2, "Venezuelan bolívar", "Bs."), (2007, 12, 31)),
    withdrawn(
        since(current("VEF", "937", D2, "Venezuelan bolívar fuerte", "Bs.F."), (2008, 1, 1)),
        (2018, 8, 20),
    ),
    withdrawn(current("XEU", "954", NA, "European Currency Unit", "₠"), (1998, 12, 31)),
    withdrawn(current("ZMK", "894", D2, "Zambian kwacha", "ZK"), (2012, 12, 31)),
    withdrawn(current("ZWD", "716", D2, "Zimbabwean dollar", "Z$"), (2008, 7, 31)),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static CatalogEntry>> =
    Lazy::new(|| CATALOG.iter().map(|entry| (entry.code, entry)).collect());

/// Finds a catalog entry by code (case-insensitive).
#[must_use]
pub fn lookup(code: &str) -> Option<&'static CatalogEntry> {
    BY_CODE.get(code.trim().to_uppercase().as_str()).copied()
}
