pub mod application {
    pub mod plan {
        pub mod build;
        pub mod get_by_id;
        pub mod list;
    }
    pub mod shopping_list {
        pub mod aggregate;
    }
}

pub mod domain {
    pub mod errors;
    #[cfg(test)]
    pub(crate) mod fixtures;
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod food_catalog;
        pub mod model;
        pub mod source;
        pub mod value_objects;
    }
    pub mod meal {
        pub mod composer;
        pub mod errors;
        pub mod model;
        pub mod value_objects;
    }
    pub mod nutrition {
        pub mod errors;
        pub mod model;
    }
    pub mod plan {
        pub mod builder;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod settings;
        pub mod value_objects;
        pub mod use_cases {
            pub mod build;
            pub mod get_by_id;
            pub mod list;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shopping_list {
        pub mod aggregator;
        pub mod errors;
        pub mod model;
        pub mod normalize;
        pub mod use_cases {
            pub mod aggregate;
        }
    }
}
