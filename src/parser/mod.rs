//! Line-oriented parser for exported firewall configurations.
//!
//! `parse` is total: any string input, including empty, whitespace-only,
//! comment-only, or entirely unrecognized text, yields a valid
//! `ParsedConfig`. Garbage degrades to "nothing detected", never to an
//! error, so callers have no parse-failure path to handle.

pub mod directive;
pub mod tokenizer;

use crate::model::ParsedConfig;

use directive::{Directive, SecurityService};

/// Parse raw export text into a configuration model.
///
/// Blank lines and `#` comments are skipped. Each remaining line is
/// tokenized (double-quoted runs are single tokens) and classified against
/// the known directive shapes; recognized directives accumulate into the
/// result, repeated scalar directives last-wins, and anything else is
/// ignored.
pub fn parse(text: &str) -> ParsedConfig {
    let mut config = ParsedConfig::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = tokenizer::tokenize(line);
        if tokens.is_empty() {
            continue;
        }

        match directive::classify(&tokens, idx + 1) {
            Some(directive) => apply(&mut config, directive),
            None => tracing::debug!(line = idx + 1, "skipping unrecognized directive"),
        }
    }

    config
}

fn apply(config: &mut ParsedConfig, directive: Directive) {
    match directive {
        Directive::AccessRule(rule) => config.access_rules.push(rule),
        Directive::Interface(interface) => config.interfaces.push(interface),
        Directive::VpnPolicy(vpn) => config.vpn_configs.push(vpn),
        Directive::NatPolicy(object) => config.nat_policies.push(object),
        Directive::AddressObject(object) => config.address_objects.push(object),
        Directive::ServiceObject(object) => config.service_objects.push(object),
        Directive::Service { service, enabled } => {
            let services = &mut config.security_services;
            match service {
                SecurityService::Ips => services.ips = enabled,
                SecurityService::GatewayAv => services.gateway_av = enabled,
                SecurityService::DpiSsl => services.dpi_ssl = enabled,
                SecurityService::Atp => services.atp = enabled,
                SecurityService::AppControl => services.app_control = enabled,
                SecurityService::ContentFilter => services.content_filter = enabled,
                SecurityService::BotnetFilter => services.botnet_filter = enabled,
            }
        }
        Directive::AdminUsername(name) => {
            config.admin_settings.usernames.insert(name);
        }
        Directive::Mfa(enabled) => config.admin_settings.mfa_enabled = enabled,
        Directive::WanManagement(enabled) => {
            config.admin_settings.wan_management_enabled = enabled;
        }
        Directive::HttpsAdminPort(port) => {
            config.admin_settings.https_admin_port = Some(port);
        }
        Directive::Ssh(enabled) => config.admin_settings.ssh_enabled = enabled,
        Directive::NtpServer(addr) => config.system_settings.ntp_servers.push(addr),
        Directive::Hostname(name) => config.system_settings.hostname = Some(name),
        Directive::FirmwareVersion(version) => {
            config.system_settings.firmware_version = Some(version);
        }
    }
}
