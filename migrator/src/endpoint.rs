//! Remote endpoint description and argument assembly.
//!
//! Both client programs take the same connection options: an optional
//! `-I <address>` override and optional `-U user%password` credentials.
//! [`RemoteEndpoint`] owns those settings and produces the full argument
//! vectors, so call sites never concatenate shell strings.

use spoolmig_common::unc::DRIVER_STORE_SHARE;

/// Authentication for a remote host. Both parts are required; a user
/// without a password (or vice versa) is treated as anonymous access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name.
    pub user: String,
    /// Account password.
    pub password: String,
}

/// One print server, with everything needed to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    /// NetBIOS or DNS host name.
    pub host: String,
    /// Optional IP address override.
    pub address: Option<String>,
    /// Optional credentials; `None` connects anonymously.
    pub credentials: Option<Credentials>,
}

impl RemoteEndpoint {
    /// Argument vector for running a management command through
    /// `rpcclient`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spoolmig::endpoint::RemoteEndpoint;
    ///
    /// let endpoint = RemoteEndpoint {
    ///     host: "printsrv".to_owned(),
    ///     address: None,
    ///     credentials: None,
    /// };
    /// assert_eq!(endpoint.rpc_args("enumprinters"), ["printsrv", "-c", "enumprinters"]);
    /// ```
    #[must_use]
    pub fn rpc_args(&self, command: &str) -> Vec<String> {
        let mut args = vec![self.host.clone()];
        self.push_connection_args(&mut args);
        args.push("-c".to_owned());
        args.push(command.to_owned());
        args
    }

    /// Argument vector for running a driver-store transfer command through
    /// `smbclient`. `-E` keeps the client's own chatter off stdout.
    #[must_use]
    pub fn smb_args(&self, command: &str) -> Vec<String> {
        let mut args = vec![format!("//{}/{DRIVER_STORE_SHARE}", self.host)];
        self.push_connection_args(&mut args);
        args.push("-E".to_owned());
        args.push("-c".to_owned());
        args.push(command.to_owned());
        args
    }

    fn push_connection_args(&self, args: &mut Vec<String>) {
        if let Some(address) = &self.address {
            args.push("-I".to_owned());
            args.push(address.clone());
        }
        if let Some(credentials) = &self.credentials {
            args.push("-U".to_owned());
            args.push(format!("{}%{}", credentials.user, credentials.password));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_endpoint() -> RemoteEndpoint {
        RemoteEndpoint {
            host: "printsrv".to_owned(),
            address: Some("10.0.0.5".to_owned()),
            credentials: Some(Credentials {
                user: "admin".to_owned(),
                password: "s3cret".to_owned(),
            }),
        }
    }

    #[test]
    fn rpc_args_include_address_and_credentials() {
        let args = full_endpoint().rpc_args("enumdrivers");
        assert_eq!(
            args,
            [
                "printsrv",
                "-I",
                "10.0.0.5",
                "-U",
                "admin%s3cret",
                "-c",
                "enumdrivers",
            ]
        );
    }

    #[test]
    fn smb_args_address_the_driver_store_share() {
        let args = full_endpoint().smb_args("tar x /tmp/stage.tar");
        assert_eq!(args.first().map(String::as_str), Some("//printsrv/print$"));
        assert!(args.contains(&"-E".to_owned()));
        assert_eq!(args.last().map(String::as_str), Some("tar x /tmp/stage.tar"));
    }

    #[test]
    fn anonymous_endpoint_omits_connection_flags() {
        let endpoint = RemoteEndpoint {
            host: "printsrv".to_owned(),
            address: None,
            credentials: None,
        };
        let args = endpoint.rpc_args("enumprinters");
        assert!(!args.contains(&"-I".to_owned()));
        assert!(!args.contains(&"-U".to_owned()));
    }
}
