//! Stock hosts files shipped by common operating systems.
//!
//! Used to seed a shared hosts key that does not exist yet.

/// Default `/etc/hosts` on macOS
pub const DEFAULT_MACOS: &str = "
##
# Host Database
#
# localhost is used to configure the loopback interface
# when the system is booting.  Do not change this entry.
##

127.0.0.1       localhost
255.255.255.255 broadcasthost
::1             localhost
fe80::1%lo0     localhost
";

/// Default `/etc/hosts` on Debian-style Linux. `HOSTNAME` is a placeholder.
pub const DEFAULT_LINUX: &str = "
127.0.0.1   localhost
127.0.1.1   HOSTNAME

# The following lines are desirable for IPv6 capable hosts
::1     localhost ip6-localhost ip6-loopback
fe00::0 ip6-localnet
ff00::0 ip6-mcastprefix
ff02::1 ip6-allnodes
ff02::2 ip6-allrouters
ff02::3 ip6-allhosts
";

const HOSTNAME_PLACEHOLDER: &str = "HOSTNAME";

/// The Linux defaults with the machine's hostname filled in.
#[must_use]
pub fn linux_defaults(hostname: &str) -> String {
    DEFAULT_LINUX.replace(HOSTNAME_PLACEHOLDER, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Family;
    use crate::document::HostsDocument;
    use crate::format::OutputFormat;

    #[test]
    fn test_linux_defaults() {
        let mut doc = HostsDocument::parse(linux_defaults("node-7"));
        let hosts = doc.hosts();
        assert!(hosts.contains_domain("node-7"));
        assert!(!hosts.contains_domain("HOSTNAME"));
        assert_eq!(hosts.len(), 10);
        assert_eq!(
            doc.format(OutputFormat::Unix),
            "127.0.0.1 localhost\n127.0.1.1 node-7\n::1 localhost ip6-localhost ip6-loopback\n\
             fe00:: ip6-localnet\nff00:: ip6-mcastprefix\nff02::1 ip6-allnodes\n\
             ff02::2 ip6-allrouters\nff02::3 ip6-allhosts\n"
        );
    }

    #[test]
    fn test_macos_defaults_skip_scoped_address() {
        let doc = HostsDocument::parse(DEFAULT_MACOS);
        let hosts = doc.hosts();
        // the zone-scoped fe80::1%lo0 line is reported, not parsed
        assert_eq!(hosts.len(), 3);
        let v6 = hosts.find_by_domain_family("localhost", Family::Ipv6).unwrap();
        assert_eq!(v6.address().to_string(), "::1");
        assert!(hosts.contains_domain("broadcasthost"));
        assert!(doc.diagnostics().iter().any(|d| d.line == 12));
    }
}
