//! URL templates for the vendor's app API endpoints.

use crate::session::Credentials;

pub(crate) const BASE_URL: &str = "https://mypagesapi.sectoralarm.net";

pub(crate) fn status(base: &str, credentials: &Credentials) -> String {
    format!("{base}/api/panel/status?{}", credential_query(credentials))
}

pub(crate) fn temperatures(base: &str, credentials: &Credentials) -> String {
    format!("{base}/api/panel/temperatures?{}", credential_query(credentials))
}

pub(crate) fn ethernet_status(base: &str, credentials: &Credentials) -> String {
    format!("{base}/api/panel/ethernetstatus?{}", credential_query(credentials))
}

pub(crate) fn lock_devices(base: &str, credentials: &Credentials) -> String {
    format!("{base}/api/panel/locks/devices?{}", credential_query(credentials))
}

pub(crate) fn lock_status(base: &str, credentials: &Credentials) -> String {
    format!("{base}/api/panel/locks/status?{}", credential_query(credentials))
}

pub(crate) fn history(base: &str, credentials: &Credentials) -> String {
    format!("{base}/api/panel/history?{}", credential_query(credentials))
}

pub(crate) fn lock_door(base: &str, credentials: &Credentials, serial_no: &str, code: &str) -> String {
    format!("{base}/api/panel/locks/lock?{}&serialNo={serial_no}&code={code}", credential_query(credentials))
}

pub(crate) fn unlock_door(base: &str, credentials: &Credentials, serial_no: &str, code: &str) -> String {
    format!("{base}/api/panel/locks/unlock?{}&serialNo={serial_no}&code={code}", credential_query(credentials))
}

pub(crate) fn set_arm_state(base: &str, giid: &str) -> String {
    format!("{base}/api/panel/{giid}/armstate")
}

pub(crate) fn lock_config(base: &str, giid: &str, device_label: &str) -> String {
    format!("{base}/api/panel/{giid}/locks/{device_label}/config")
}

pub(crate) fn login(base: &str) -> String {
    format!("{base}/api/login")
}

fn credential_query(credentials: &Credentials) -> String {
    format!(
        "userId={}&password={}&panelId={}",
        credentials.username, credentials.password, credentials.panel
    )
}
