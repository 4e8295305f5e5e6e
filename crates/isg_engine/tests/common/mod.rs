#![allow(dead_code)]

use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ON_ICON: &str = "/images/ste-symbol_an-97.png";
pub const OFF_ICON: &str = "/images/ste-symbol_aus-97.png";

/// Wraps `body` in the console chrome: title and language marker.
pub fn console_page(language: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>STIEBEL ELTRON Reglersteuerung</title></head>
<body>
  <div id="navi"><div class="eingestelle_sprache">{language}</div></div>
  <div id="werte">{body}</div>
</body>
</html>"#
    )
}

pub fn value_row(label: &str, value: &str) -> String {
    format!(r#"<tr class="even"><td class="key">{label}</td><td class="value">{value}</td></tr>"#)
}

pub fn icon_row(label: &str, icon: &str) -> String {
    format!(
        r#"<tr class="odd"><td class="key">{label}</td><td class="value"><img src="{icon}" height="15"></td></tr>"#
    )
}

pub fn headed_table(header: &str, rows: &[String]) -> String {
    format!(
        r#"<table class="info"><tr><th colspan="2" class="round-top">{header}</th></tr>{}</table>"#,
        rows.concat()
    )
}

pub fn root_en() -> String {
    console_page("ENGLISH", "<p>Welcome</p>")
}

pub fn info_system_en() -> String {
    console_page(
        "ENGLISH",
        &[
            headed_table(
                "ROOM TEMPERATURE",
                &[
                    value_row("ACTUAL TEMPERATURE 1", "23,3°C"),
                    value_row("RELATIVE HUMIDITY 1", "53,3%"),
                ],
            ),
            headed_table(
                "HEATING",
                &[
                    value_row("OUTSIDE TEMPERATURE", "5,1°C"),
                    value_row("ACTUAL TEMPERATURE HK 1", "32,4°C"),
                    value_row("SET TEMPERATURE HK 1", "33,0°C"),
                ],
            ),
        ]
        .concat(),
    )
}

pub fn info_heat_pump_en() -> String {
    console_page(
        "ENGLISH",
        &[
            headed_table(
                "AMOUNT OF HEAT",
                &[
                    value_row("VD HEATING DAY", "12,5KWh"),
                    value_row("VD HEATING TOTAL", "24,249MWh"),
                ],
            ),
            headed_table(
                "POWER CONSUMPTION",
                &[
                    value_row("VD HEATING DAY", "3,2KWh"),
                    value_row("VD HEATING TOTAL", "7,1MWh"),
                ],
            ),
            headed_table("STARTS", &[value_row("COMPRESSOR", "1234")]),
        ]
        .concat(),
    )
}

pub fn system_status_en(defrost_icon: &str) -> String {
    console_page(
        "ENGLISH",
        &headed_table("OPERATING MODE", &[icon_row("DEFROST", defrost_icon)]),
    )
}

pub fn heat_pump_status_en() -> String {
    console_page(
        "ENGLISH",
        &headed_table(
            "HEAT PUMP STATUS",
            &[
                icon_row("COMPRESSOR", ON_ICON),
                icon_row("AUXILIARY HEATER", OFF_ICON),
                icon_row("BOOSTER HEATER STAGE 1", OFF_ICON),
                icon_row("BOOSTER HEATER STAGE 2", ON_ICON),
            ],
        ),
    )
}

pub fn diagnosis_system_en() -> String {
    console_page(
        "ENGLISH",
        &[
            headed_table("WPM", &[value_row("Major version", "9")]),
            headed_table(
                "ISG",
                &[
                    value_row("Major version", "12"),
                    value_row("Minor version", "2"),
                    value_row("Revision", "1"),
                ],
            ),
        ]
        .concat(),
    )
}

pub fn network_profile_en() -> String {
    console_page(
        "ENGLISH",
        "<p>IP address: 192.168.1.20</p><p>MAC: AA:BB:CC:DD:EE:FF</p>",
    )
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

pub async fn mount_root(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param_is_missing("s"))
        .respond_with(html(body))
        .mount(server)
        .await;
}

pub async fn mount_section(server: &MockServer, section: &str, body: String) {
    mount_section_response(server, section, html(body)).await;
}

pub async fn mount_section_response(server: &MockServer, section: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", section))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Serves every English page of a healthy device.
pub async fn mount_device(server: &MockServer) {
    mount_root(server, root_en()).await;
    mount_section(server, "1,0", info_system_en()).await;
    mount_section(server, "1,1", info_heat_pump_en()).await;
    mount_section(server, "2,0", system_status_en(ON_ICON)).await;
    mount_section(server, "2,2", heat_pump_status_en()).await;
    mount_section(server, "2,7", diagnosis_system_en()).await;
    mount_section(server, "5,0", network_profile_en()).await;
}

pub fn host_of(server: &MockServer) -> String {
    server.address().to_string()
}
