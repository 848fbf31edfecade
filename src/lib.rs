pub mod configuration;

pub mod commute {
    pub mod commuteerror;
    pub mod weekdaypattern;
    pub mod excludedrange;
    pub mod allowancecalculator;
    pub mod dayclassifier;
    pub mod dayrecord;
    pub mod recordbuilder;
    pub mod allowancesummary;
}

pub mod export {
    pub mod csvexporter;
}

pub mod math {
    pub mod round;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdaybeforeholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod jointcalendar;
        pub mod germany;
        pub mod holidayprovider;
        pub mod holidaycalendarmanager;
    }
}
