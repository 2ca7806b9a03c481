//! Static holiday rule tables.
//!
//! Process-wide read-only data, baked in at compile time and never mutated:
//! safe for unlimited concurrent readers without locking. The hierarchy is
//! country → state → region, each level carrying the rules that apply *in
//! addition to* its parent's rules.
//!
//! Subdivision listings expose table order as-is; only the merged country
//! list is sorted, and that happens in the aggregation service.

use chrono::Weekday::{Mon, Thu, Tue};

use super::engine::{easter, fixed, last_weekday, nth_weekday, public, HolidayRule, Shift};
use crate::model::HolidayKind::{Bank, Observance, Optional, Public};

pub struct RegionDef {
    pub code: &'static str,
    pub name: &'static str,
    pub rules: &'static [HolidayRule],
}

pub struct StateDef {
    pub code: &'static str,
    pub name: &'static str,
    pub rules: &'static [HolidayRule],
    pub regions: &'static [RegionDef],
}

pub struct CountryDef {
    pub code: &'static str,
    pub name: &'static str,
    pub rules: &'static [HolidayRule],
    pub states: &'static [StateDef],
}

impl CountryDef {
    pub fn state(&self, code: &str) -> Option<&'static StateDef> {
        self.states.iter().find(|s| s.code.eq_ignore_ascii_case(code))
    }
}

impl StateDef {
    pub fn region(&self, code: &str) -> Option<&'static RegionDef> {
        self.regions
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
    }
}

/// Look up a country definition by ISO code, case-insensitively.
pub fn country(code: &str) -> Option<&'static CountryDef> {
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

const NO_STATES: &[StateDef] = &[];
const NO_REGIONS: &[RegionDef] = &[];

pub static COUNTRIES: &[CountryDef] = &[
    CountryDef {
        code: "AU",
        name: "Australia",
        rules: &[
            public("New Year's Day", 1, 1).with_shift(Shift::NextMonday),
            public("Australia Day", 1, 26).with_shift(Shift::NextMonday),
            easter("Good Friday", -2, Public),
            easter("Easter Monday", 1, Public),
            public("Anzac Day", 4, 25),
            public("Christmas Day", 12, 25).with_shift(Shift::NextMonday),
            public("Boxing Day", 12, 26).with_shift(Shift::NextMonday),
        ],
        states: &[
            StateDef {
                code: "NSW",
                name: "New South Wales",
                rules: &[
                    nth_weekday("Bank Holiday", 8, Mon, 1, Bank),
                    nth_weekday("Labour Day", 10, Mon, 1, Public),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "VIC",
                name: "Victoria",
                rules: &[
                    nth_weekday("Labour Day", 3, Mon, 2, Public),
                    nth_weekday("Melbourne Cup Day", 11, Tue, 1, Public),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "QLD",
                name: "Queensland",
                rules: &[nth_weekday(
                    "Labour Day",
                    5,
                    Mon,
                    1,
                    Public,
                )],
                regions: NO_REGIONS,
            },
        ],
    },
    CountryDef {
        code: "CA",
        name: "Canada",
        rules: &[
            public("New Year's Day", 1, 1).with_shift(Shift::NextMonday),
            easter("Good Friday", -2, Public),
            easter("Easter Monday", 1, Optional),
            public("Canada Day", 7, 1).with_shift(Shift::NextMonday),
            nth_weekday("Labour Day", 9, Mon, 1, Public),
            nth_weekday("Thanksgiving", 10, Mon, 2, Public),
            fixed("Remembrance Day", 11, 11, Observance),
            public("Christmas Day", 12, 25).with_shift(Shift::NextMonday),
            fixed("Boxing Day", 12, 26, Bank).with_shift(Shift::NextMonday),
        ],
        states: &[
            StateDef {
                code: "ON",
                name: "Ontario",
                rules: &[
                    nth_weekday("Family Day", 2, Mon, 3, Public),
                    nth_weekday("Civic Holiday", 8, Mon, 1, Optional),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "QC",
                name: "Quebec",
                rules: &[public("Saint-Jean-Baptiste Day", 6, 24)],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "BC",
                name: "British Columbia",
                rules: &[
                    nth_weekday("Family Day", 2, Mon, 3, Public),
                    nth_weekday("British Columbia Day", 8, Mon, 1, Public),
                ],
                regions: NO_REGIONS,
            },
        ],
    },
    CountryDef {
        code: "DE",
        name: "Germany",
        rules: &[
            public("Neujahr", 1, 1),
            easter("Karfreitag", -2, Public),
            easter("Ostermontag", 1, Public),
            public("Tag der Arbeit", 5, 1),
            easter("Christi Himmelfahrt", 39, Public),
            easter("Pfingstmontag", 50, Public),
            public("Tag der Deutschen Einheit", 10, 3),
            fixed("Heiligabend", 12, 24, Bank),
            public("1. Weihnachtstag", 12, 25),
            public("2. Weihnachtstag", 12, 26),
            fixed("Silvester", 12, 31, Bank),
        ],
        states: &[
            StateDef {
                code: "BW",
                name: "Baden-Württemberg",
                rules: &[
                    public("Heilige Drei Könige", 1, 6),
                    easter("Fronleichnam", 60, Public),
                    public("Allerheiligen", 11, 1),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "BY",
                name: "Bayern",
                rules: &[
                    public("Heilige Drei Könige", 1, 6),
                    easter("Fronleichnam", 60, Public),
                    public("Mariä Himmelfahrt", 8, 15),
                    public("Allerheiligen", 11, 1),
                ],
                regions: &[RegionDef {
                    code: "A",
                    name: "Stadt Augsburg",
                    rules: &[public("Augsburger Friedensfest", 8, 8)],
                }],
            },
            StateDef {
                code: "BE",
                name: "Berlin",
                rules: &[public("Internationaler Frauentag", 3, 8)],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "NW",
                name: "Nordrhein-Westfalen",
                rules: &[
                    easter("Fronleichnam", 60, Public),
                    public("Allerheiligen", 11, 1),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "SN",
                name: "Sachsen",
                rules: &[public("Reformationstag", 10, 31)],
                regions: NO_REGIONS,
            },
        ],
    },
    CountryDef {
        code: "FR",
        name: "France",
        rules: &[
            public("Jour de l'an", 1, 1),
            easter("Lundi de Pâques", 1, Public),
            public("Fête du Travail", 5, 1),
            public("Victoire 1945", 5, 8),
            easter("Ascension", 39, Public),
            easter("Lundi de Pentecôte", 50, Public),
            public("Fête nationale", 7, 14),
            public("Assomption", 8, 15),
            public("Toussaint", 11, 1),
            public("Armistice 1918", 11, 11),
            public("Noël", 12, 25),
        ],
        states: NO_STATES,
    },
    CountryDef {
        code: "GB",
        name: "United Kingdom",
        rules: &[
            // UK bank holidays are the public holidays
            public("New Year's Day", 1, 1).with_shift(Shift::NextMonday),
            easter("Good Friday", -2, Public),
            nth_weekday("Early May Bank Holiday", 5, Mon, 1, Public),
            last_weekday("Spring Bank Holiday", 5, Mon, Public),
            fixed("Guy Fawkes Night", 11, 5, Observance),
            public("Christmas Day", 12, 25).with_shift(Shift::NextMonday),
            public("Boxing Day", 12, 26).with_shift(Shift::NextMonday),
        ],
        states: &[
            StateDef {
                code: "ENG",
                name: "England",
                rules: &[
                    easter("Easter Monday", 1, Public),
                    last_weekday("Summer Bank Holiday", 8, Mon, Public),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "WLS",
                name: "Wales",
                rules: &[
                    easter("Easter Monday", 1, Public),
                    fixed("St David's Day", 3, 1, Observance),
                    last_weekday("Summer Bank Holiday", 8, Mon, Public),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "SCT",
                name: "Scotland",
                rules: &[
                    public("2 January", 1, 2).with_shift(Shift::NextMonday),
                    nth_weekday("Summer Bank Holiday", 8, Mon, 1, Public),
                    public("St Andrew's Day", 11, 30),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "NIR",
                name: "Northern Ireland",
                rules: &[
                    public("St Patrick's Day", 3, 17),
                    easter("Easter Monday", 1, Public),
                    public("Battle of the Boyne", 7, 12),
                    last_weekday("Summer Bank Holiday", 8, Mon, Public),
                ],
                regions: NO_REGIONS,
            },
        ],
    },
    CountryDef {
        code: "JP",
        name: "Japan",
        rules: &[
            public("元日", 1, 1),
            nth_weekday("成人の日", 1, Mon, 2, Public),
            public("建国記念の日", 2, 11),
            public("昭和の日", 4, 29),
            public("憲法記念日", 5, 3),
            public("みどりの日", 5, 4),
            public("こどもの日", 5, 5),
            nth_weekday("海の日", 7, Mon, 3, Public),
            public("山の日", 8, 11),
            nth_weekday("敬老の日", 9, Mon, 3, Public),
            nth_weekday("スポーツの日", 10, Mon, 2, Public),
            public("文化の日", 11, 3),
            public("勤労感謝の日", 11, 23),
        ],
        states: NO_STATES,
    },
    CountryDef {
        code: "US",
        name: "United States",
        rules: &[
            public("New Year's Day", 1, 1).with_shift(Shift::NearestWeekday),
            nth_weekday(
                "Martin Luther King Jr. Day",
                1,
                Mon,
                3,
                Public,
            ),
            nth_weekday("Washington's Birthday", 2, Mon, 3, Public),
            last_weekday("Memorial Day", 5, Mon, Public),
            public("Juneteenth", 6, 19).with_shift(Shift::NearestWeekday),
            public("Independence Day", 7, 4).with_shift(Shift::NearestWeekday),
            nth_weekday("Labor Day", 9, Mon, 1, Public),
            nth_weekday("Columbus Day", 10, Mon, 2, Observance),
            public("Veterans Day", 11, 11).with_shift(Shift::NearestWeekday),
            nth_weekday("Thanksgiving", 11, Thu, 4, Public),
            fixed("Halloween", 10, 31, Observance),
            public("Christmas Day", 12, 25).with_shift(Shift::NearestWeekday),
        ],
        states: &[
            StateDef {
                code: "CA",
                name: "California",
                rules: &[fixed("César Chávez Day", 3, 31, Optional)],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "TX",
                name: "Texas",
                rules: &[
                    fixed("Texas Independence Day", 3, 2, Optional),
                    fixed("San Jacinto Day", 4, 21, Optional),
                ],
                regions: NO_REGIONS,
            },
            StateDef {
                code: "NY",
                name: "New York",
                rules: &[nth_weekday("Election Day", 11, Tue, 1, Public)],
                regions: NO_REGIONS,
            },
        ],
    },
];
