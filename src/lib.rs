pub mod configuration;

pub mod distribution {
    pub mod domaingrid;
    pub mod densitytable;
    pub mod cumulativetable;
    pub mod intervalprober;
    pub mod normaldistribution;
}

pub mod interval {
    pub mod interval;
    pub mod orderingpolicy;
    pub mod rangecontrol;
    pub mod updateevent;
    pub mod intervalcontroller;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod tabulatedcurve;
        }
    }
    pub mod round;
}

pub mod presentation {
    pub mod renderframe;
    pub mod report;
}

pub mod session;
