pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod verify_receipt_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod verify_receipt_api {
            pub(crate) mod verify_receipt_request_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod receipt_validation_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod environment;
        pub mod receipt_info;
        pub mod receipt_status;
    }
    pub mod repositories {
        pub mod receipt_validation_repository;
    }
}

pub(crate) mod constants;
pub mod errors;
pub mod util;
