pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod integration {
        pub mod integrationconfig;
        pub mod numericalintegration;
        pub mod trapezoidalintegration;
        pub mod simpsonintegration;
        pub mod integrationrulemanager;
    }
}
