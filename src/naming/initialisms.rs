/// Camel-cased forms of well-known initialisms and their conventional
/// upper-case spellings, as used by the downstream code generator.
fn lookup(s: &str) -> Option<&'static str> {
    let upper = match s {
        "Acl" => "ACL",
        "Api" => "API",
        "Ascii" => "ASCII",
        "Cpu" => "CPU",
        "Css" => "CSS",
        "Csv" => "CSV",
        "Dns" => "DNS",
        "Eof" => "EOF",
        "Guid" => "GUID",
        "Html" => "HTML",
        "Http" => "HTTP",
        "Https" => "HTTPS",
        "Icmp" => "ICMP",
        "Id" => "ID",
        "Ip" => "IP",
        "Json" => "JSON",
        "Kvk" => "KVK",
        "Lhs" => "LHS",
        "Pdf" => "PDF",
        "Pgp" => "PGP",
        "Qps" => "QPS",
        "Qr" => "QR",
        "Ram" => "RAM",
        "Rhs" => "RHS",
        "Rpc" => "RPC",
        "Sla" => "SLA",
        "Smtp" => "SMTP",
        "Sql" => "SQL",
        "Ssh" => "SSH",
        "Svg" => "SVG",
        "Tcp" => "TCP",
        "Tls" => "TLS",
        "Ttl" => "TTL",
        "Udp" => "UDP",
        "Ui" => "UI",
        "Uid" => "UID",
        "Uri" => "URI",
        "Url" => "URL",
        "Utf8" => "UTF8",
        "Uuid" => "UUID",
        "Vm" => "VM",
        "Xml" => "XML",
        "Xmpp" => "XMPP",
        "Xsrf" => "XSRF",
        "Xss" => "XSS",
        _ => return None,
    };
    Some(upper)
}

/// Rewrite a trailing initialism to its upper-case form.
///
/// Suffix windows of length 5 down to 2 are checked in order against the
/// table above, each window re-evaluated on the already-rewritten string so
/// the longest candidate at the tail wins. Only the tail is corrected;
/// initialisms embedded earlier in the identifier are left alone.
pub fn correct_initialisms(s: &str) -> String {
    let mut out = s.to_string();
    for window in (2..=5).rev() {
        let len = out.len();
        if len < window || !out.is_char_boundary(len - window) {
            continue;
        }
        if let Some(upper) = lookup(&out[len - window..]) {
            out.replace_range(len - window.., upper);
        }
    }
    out
}
