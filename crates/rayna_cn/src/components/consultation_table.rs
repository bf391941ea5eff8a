//! Three-column consultation overview: doctors, conversations, date and time

use rayna_core::{div, el, p, span, Element, ElementBuilder, Node};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub is_online: bool,
}

impl Doctor {
    pub fn new(name: &str, role: &str, avatar: &str, is_online: bool) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            avatar: avatar.to_string(),
            is_online,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Consultation {
    pub title: String,
    pub message: String,
    pub date: String,
    pub time: String,
}

impl Consultation {
    pub fn new(title: &str, message: &str, date: &str, time: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}

pub fn sample_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new("Dr. Alison Ogaga", "General Practioner", "/images/doctor1.jpg", true),
        Doctor::new("Dr. Jennifer Johnson", "Primary Care Physician", "/images/doctor2.jpg", true),
        Doctor::new("Dr. Samuel Smith", "Mental Health Professional", "/images/doctor3.jpg", true),
        Doctor::new("Dr. Lily Chen", "Dermatologist", "/images/doctor4.jpg", true),
    ]
}

pub fn sample_consultations() -> Vec<Consultation> {
    vec![
        Consultation::new(
            "I'm feeling uneasy",
            "Good morning. I'm sorry to hear that you're not feeling well. Can you tell me more about your symptoms? How long have you been feeling this way?",
            "1 Jul, 2023",
            "1:00 PM",
        ),
        Consultation::new(
            "I have a rash",
            "Let's run some tests to understand better what might be causing these symptoms.",
            "1 Jul, 2023",
            "10:00 AM",
        ),
        Consultation::new(
            "I'm suffering from anxiety",
            "Good afternoon. It's important that we address this. Anxiety can significantly impact your quality of life. Let's explore some strategies and perhaps treatments that can help you manage your anxiety effectively.",
            "1 Jul, 2023",
            "4:00 PM",
        ),
        Consultation::new(
            "I have a rash",
            "Hello, let's take a look at that rash. I'll also ask you some questions about your symptoms and any potential allergens or irritants you might have been exposed to.",
            "30 Jun, 2023",
            "8:00 AM",
        ),
    ]
}

const ROW: &str = "px-6 py-5 border-b border-[#F0F2F5] last:border-b-0";

fn column_title(title: &str) -> Element {
    el("h3").class("text-sm font-medium text-[#344054] mb-4 px-6").text(title)
}

#[derive(Clone, Debug, Default)]
pub struct ConsultationTable {
    doctors: Vec<Doctor>,
    consultations: Vec<Consultation>,
}

impl ConsultationTable {
    pub fn new(doctors: Vec<Doctor>, consultations: Vec<Consultation>) -> Self {
        Self {
            doctors,
            consultations,
        }
    }

    /// The table filled with the bundled sample rows
    pub fn sample() -> Self {
        Self::new(sample_doctors(), sample_consultations())
    }

    pub fn consultation_count(&self) -> usize {
        self.consultations.len()
    }

    fn doctor_row(doctor: &Doctor) -> Element {
        div()
            .class("flex items-start gap-3")
            .class(ROW)
            .child(
                div()
                    .class("relative")
                    .child(
                        el("img")
                            .attr("src", doctor.avatar.clone())
                            .attr("alt", doctor.name.clone())
                            .class("w-10 h-10 rounded-full object-cover"),
                    )
                    .child_opt(doctor.is_online.then(|| {
                        span().class(
                            "absolute bottom-0 right-0 w-2.5 h-2.5 bg-[#04802E] border-2 border-white rounded-full",
                        )
                    })),
            )
            .child(
                div()
                    .child(el("h4").class("font-medium text-[#101928]").text(doctor.name.clone()))
                    .child(p().class("text-sm text-[#475367]").text(doctor.role.clone())),
            )
    }
}

impl ElementBuilder for ConsultationTable {
    fn build(&self) -> Node {
        let doctors = div()
            .class("col-span-3 border-r border-[#E4E7EC]")
            .child(column_title("Name"))
            .child(div().class("space-y-4").children(self.doctors.iter().map(Self::doctor_row)));

        let conversations = div()
            .class("col-span-7")
            .child(column_title("Conversation"))
            .child(div().class("space-y-0").children(self.consultations.iter().map(|c| {
                div()
                    .class(ROW)
                    .child(el("h4").class("font-medium text-[#344054] mb-1").text(c.title.clone()))
                    .child(p().class("text-sm text-[#667185]").text(c.message.clone()))
            })));

        let times = div()
            .class("col-span-2")
            .child(column_title("Date and time"))
            .child(div().class("space-y-0").children(self.consultations.iter().map(|c| {
                div()
                    .class(ROW)
                    .child(p().class("font-medium text-[#101928]").text(c.date.clone()))
                    .child(p().class("text-sm text-[#667185]").text(c.time.clone()))
            })));

        div()
            .class("overflow-x-auto")
            .child(
                div()
                    .class("grid grid-cols-12 gap-4 bg-white border border-[#E4E7EC] rounded-lg p-6 min-w-[1096px]")
                    .child(doctors)
                    .child(conversations)
                    .child(times),
            )
            .into_node()
    }
}

pub fn consultation_table(doctors: Vec<Doctor>, consultations: Vec<Consultation>) -> ConsultationTable {
    ConsultationTable::new(doctors, consultations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_renders_every_row() {
        let node = ConsultationTable::sample().build();
        let text = node.text_content();
        assert!(text.contains("Dr. Lily Chen"));
        assert!(text.contains("30 Jun, 2023"));
        assert_eq!(node.find_all(&|e| e.tag() == "img").len(), 4);
        assert_eq!(node.find_all(&|e| e.has_class("bg-[#04802E]")).len(), 4);
    }

    #[test]
    fn test_offline_doctor_has_no_dot() {
        let node = consultation_table(vec![Doctor::new("Dr. A", "GP", "/a.jpg", false)], Vec::new()).build();
        assert!(node.find(&|e| e.has_class("bg-[#04802E]")).is_none());
    }

    #[test]
    fn test_sample_data_serializes() {
        let json = serde_json::to_value(sample_doctors()).unwrap();
        assert_eq!(json[0]["isOnline"], serde_json::Value::Bool(true));
        assert_eq!(serde_json::to_value(sample_consultations()).unwrap().as_array().map(Vec::len), Some(4));
    }
}
