use quick_xml::escape::escape;

const INDENT: &str = "    ";

/// An element of a SOAP payload, rendered one element per line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Element {
    Text(&'static str, String),
    Parent(&'static str, Vec<Element>),
}

impl Element {
    pub(crate) fn text(name: &'static str, value: impl ToString) -> Self {
        Self::Text(name, value.to_string())
    }

    fn render(&self, depth: usize, xml: &mut String) {
        let indent = INDENT.repeat(depth);
        match self {
            Element::Text(name, value) => {
                let value = escape(value.as_str());
                xml.push_str(&format!("{indent}<{name}>{value}</{name}>\n"));
            }

            Element::Parent(name, children) => {
                xml.push_str(&format!("{indent}<{name}>\n"));
                for child in children {
                    child.render(depth + 1, xml);
                }
                xml.push_str(&format!("{indent}</{name}>\n"));
            }
        }
    }
}

/// Wraps a payload in a SOAP 1.1 envelope with an empty header. No trailing newline.
pub(crate) fn soap_envelope(payload: &Element) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\n");
    xml.push_str(INDENT);
    xml.push_str("<soap:Header/>\n");
    xml.push_str(INDENT);
    xml.push_str("<soap:Body>\n");
    payload.render(2, &mut xml);
    xml.push_str(INDENT);
    xml.push_str("</soap:Body>\n");
    xml.push_str("</soap:Envelope>");

    xml
}
