//! Reporting sink for search results

use crate::instance::InstanceSummary;
use crate::provider::PrincipalSummary;
use std::io::{self, Write};

/// Receives matches as soon as they are found
pub trait Reporter {
    /// Header before the instances of one (account, region) pair
    fn instances_found(&mut self, account: &str, region: &str);

    fn instance(&mut self, instance: &InstanceSummary);

    fn principal_found(&mut self, account: &str, access_key_id: &str, principal: &PrincipalSummary);

    fn principal_not_found(&mut self, account: &str, access_key_id: &str);
}

/// Line-oriented, human-readable reporter
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write search output: {}", e);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn instances_found(&mut self, account: &str, region: &str) {
        self.emit(&format!(
            "Instances found in account: {}, Region: {}\n",
            account, region
        ));
    }

    fn instance(&mut self, instance: &InstanceSummary) {
        let mut text = format!(
            "Instance ID: {}\nInstance Type: {}\nRegion: {}\nPrivate IP Address: {}\n",
            instance.instance_id, instance.instance_type, instance.region, instance.private_ip
        );
        if let Some(public_ip) = &instance.public_ip {
            text.push_str(&format!("Public IP Address: {}\n", public_ip));
        }
        text.push_str("-----\n");
        self.emit(&text);
    }

    fn principal_found(&mut self, account: &str, access_key_id: &str, principal: &PrincipalSummary) {
        self.emit(&format!(
            "Found IAM user with access key {} in account {}\n\
             User Name: {}\nUser ID: {}\nARN: {}\n-----\n",
            access_key_id, account, principal.user_name, principal.user_id, principal.arn
        ));
    }

    fn principal_not_found(&mut self, account: &str, access_key_id: &str) {
        self.emit(&format!(
            "No IAM user found with access key {} in account {}\n",
            access_key_id, account
        ));
    }
}
