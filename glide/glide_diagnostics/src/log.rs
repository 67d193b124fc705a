use std::sync::{Arc, Mutex};

pub trait Logger: Send {
    fn log(&mut self, file: &'static str, line: u32, tag: &'static str, msg: &str);
}

lazy_static! {
    static ref LOGGERS: Arc<Mutex<Vec<Box<dyn Logger>>>> = Arc::new(Mutex::new(vec![]));
}

/// Fans a message out to every registered logger, or to the default
/// stdout/stderr one if none was ever added.
#[inline]
pub fn emit_log_msg(file: &'static str, line: u32, tag: &'static str, msg: &str) {
    let mut loggers = LOGGERS.lock().unwrap();
    if loggers.is_empty() {
        Println_Logger {}.log(file, line, tag, msg);
    } else {
        loggers
            .iter_mut()
            .for_each(|logger| logger.log(file, line, tag, msg));
    }
}

pub struct Println_Logger;

impl Logger for Println_Logger {
    fn log(&mut self, _file: &'static str, _line: u32, tag: &'static str, msg: &str) {
        if tag == "DEBUG" {
            eprintln!("[ {} ] {}", tag, msg);
        } else {
            println!("[ {} ] {}", tag, msg);
        }
    }
}

pub fn add_default_logger() {
    add_logger(Box::new(Println_Logger {}));
}

pub fn add_logger(logger: Box<dyn Logger>) {
    let mut loggers = LOGGERS.lock().unwrap();
    loggers.push(logger);
}
