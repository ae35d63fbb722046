#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    /// Top-level config exercising every supported field shape.
    #[derive(Debug, Default, PartialEq)]
    pub struct AppConfig {
        pub name: String,
        pub debug: bool,
        pub workers: i32,
        pub ratio: f64,
        pub ports: Vec<i32>,
        pub db: DbConfig,
        pub tags: Vec<String>,
        pub internal: String,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct DbConfig {
        pub host: String,
        pub port: i32,
        pub note: String,
        pub replica: Replica,
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct Replica {
        pub host: String,
    }

    crate::bind_struct! {
        AppConfig {
            name: "NAME",
            debug: "DEBUG",
            workers: "WORKERS",
            ratio: "RATIO",
            ports: "PORTS",
            db: "DB",
            tags: "TAGS",
            internal: "",
        }

        DbConfig {
            host: "HOST",
            port: "PORT,omitempty",
            note: "",
            replica: "REPLICA",
        }

        Replica {
            host: "HOST",
        }
    }

    // -- Narrow widths and non-integer lists ------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct Limits {
        pub small: i8,
        pub flags: Vec<bool>,
        pub rates: Vec<f64>,
    }

    crate::bind_struct! {
        Limits {
            small: "SMALL",
            flags: "FLAGS",
            rates: "RATES",
        }
    }

    // -- Unsupported field types --------------------------------------------------

    #[derive(Debug, Default, PartialEq)]
    pub struct MapConfig {
        pub labels: HashMap<String, String>,
    }

    crate::bind_struct! {
        MapConfig {
            labels: "LABELS",
        }
    }

    /// A list of an unsupported element type, bound and untagged.
    #[derive(Debug, Default, PartialEq)]
    pub struct IdList {
        pub legacy: Vec<u16>,
        pub ids: Vec<u16>,
    }

    crate::bind_struct! {
        IdList {
            legacy: "",
            ids: "IDS",
        }
    }

    /// Unsupported types that are never reached, plus an untagged nested struct.
    #[derive(Debug, Default, PartialEq)]
    pub struct Tolerant {
        pub labels: HashMap<String, String>,
        pub count: i32,
        pub port: u16,
        pub inline: Replica,
    }

    crate::bind_struct! {
        Tolerant {
            labels: "",
            count: "COUNT",
            port: "PORT,omitempty",
            inline: "",
        }
    }
}
