use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        Result
    },
    contacts::address_book::{
        Authorization,
        SortOrder,
    },
};

pub const DEFAULT_ADDRESS_BOOK: &str = "addressbook.db";

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "dataDir")]
    data_dir    : String,
    #[serde(rename = "addressBook")]
    address_book: Option<String>,
    #[serde(rename = "access")]
    access      : Option<String>,
    #[serde(rename = "sortOrder")]
    sort_order  : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,

    #[serde(skip)]
    deserde_access  : Authorization,
    #[serde(skip)]
    deserde_order   : SortOrder,
}

pub struct Builder<'a> {
    data_dir    : Option<String>,
    address_book: Option<&'a str>,
    access      : Option<Authorization>,
    sort_order  : Option<SortOrder>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            data_dir    : None,
            address_book: None,
            access      : None,
            sort_order  : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_data_dir(&mut self, input: &str) -> &mut Self {
        self.data_dir = Some(expand_home(input));
        self
    }

    pub fn with_address_book(&mut self, path: &'a str) -> &mut Self {
        self.address_book = Some(path);
        self
    }

    pub fn with_authorization(&mut self, access: Authorization) -> &mut Self {
        self.access = Some(access);
        self
    }

    pub fn with_sort_order(&mut self, order: SortOrder) -> &mut Self {
        self.sort_order = Some(order);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)?))
    }
}

fn expand_home(input: &str) -> String {
    match input.strip_prefix("~") {
        Some(rest) => {
            let home = env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}{rest}")
        },
        None => input.to_string(),
    }
}

impl Configuration {
    fn new(b: &Builder) -> Result<Self> {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                data_dir        : env::var("HOME").unwrap_or_else(|_| ".".into()),
                address_book    : None,
                access          : None,
                sort_order      : None,
                logger          : None,
                deserde_access  : Authorization::default(),
                deserde_order   : SortOrder::default(),
            }
        };

        if let Some(dir) = b.data_dir.as_ref() {
            cfg.data_dir = dir.to_string();
        } else {
            cfg.data_dir = expand_home(&cfg.data_dir);
        }
        if let Some(path) = b.address_book {
            cfg.address_book = Some(path.to_string());
        }

        cfg.deserde_access = match b.access {
            Some(access) => access,
            None => match cfg.access.as_deref() {
                Some(v) => Authorization::try_from(v)?,
                None => Authorization::default(),
            }
        };

        cfg.deserde_order = match b.sort_order {
            Some(order) => order,
            None => match cfg.sort_order.as_deref() {
                Some(v) => SortOrder::try_from(v)?,
                None => SortOrder::default(),
            }
        };

        if let Some(ref mut logger) = cfg.logger {
            if let Some(level) = b.log_level {
                logger.deserde_level = Some(level);
            } else if let Ok(level) = logger.level.parse::<LevelFilter>() {
                logger.deserde_level = Some(level);
            } else {
                logger.deserde_level = Some(LevelFilter::Info);
            }
            if let Some(file) = b.log_file {
                logger.file = Some(file.to_string());
            }
        } else {
            cfg.logger = Some(LogCfg {
                level: b.log_level.unwrap_or(LevelFilter::Info).to_string(),
                file: b.log_file.map(|f| f.to_string()),
                deserde_level: Some(b.log_level.unwrap_or(LevelFilter::Info)),
            });
        }

        Ok(cfg)
    }
}

impl Config for Configuration {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn address_book(&self) -> String {
        let name = self.address_book.as_deref().unwrap_or(DEFAULT_ADDRESS_BOOK);
        let path = Path::new(name);
        match path.is_absolute() {
            true => name.to_string(),
            false => Path::new(&self.data_dir).join(path).display().to_string(),
        }
    }

    fn authorization(&self) -> Authorization {
        self.deserde_access
    }

    fn sort_order(&self) -> SortOrder {
        self.deserde_order
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<String> {
        self.logger.as_ref().and_then(|v| v.file.clone())
    }

    #[cfg(feature = "inspect")]
    fn dump(&self) {
        println!("config: {}", self);
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dataDir:{},", self.data_dir)?;
        write!(f, "\taddressBook:{},", self.address_book())?;
        write!(f, "\taccess:{},", self.deserde_access)?;
        write!(f, "\tsortOrder:{},", self.deserde_order)?;
        write!(f, "\tlogger:{}", self.log_level())?;
        if let Some(file) = self.log_file() {
            write!(f, "({})", file)?;
        }
        Ok(())
    }
}
