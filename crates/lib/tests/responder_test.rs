//! # Reply Composition Tests
//!
//! Checks how the canned phrase and campus information are combined for each
//! intent and conversation setting.

use campusbot::{phrases::base_phrase, respond, Formality, Hierarchy, Intent};

#[test]
fn test_complaint_with_topic_appends_topic_info() {
    let reply = respond(
        "Wifi lemot banget!",
        Hierarchy::StudentToStaff,
        Formality::Casual,
    );
    assert_eq!(reply.intent, Intent::Complaint);
    assert_eq!(reply.topic.topic, "wifi");
    assert!(reply
        .text
        .starts_with("Maaf ya kak, ada masalah nih. Bisa bantu cariin solusinya? 😔\n\nTentang wifi: WiFi kampus:"));
}

#[test]
fn test_same_complaint_changes_register_with_hierarchy() {
    let dosen = respond(
        "Wifi lemot banget!",
        Hierarchy::StudentToDosen,
        Formality::Formal,
    );
    let peer = respond("Wifi lemot banget!", Hierarchy::PeerToPeer, Formality::Casual);
    assert!(dosen.text.starts_with("Dengan hormat Bapak/Ibu Dosen."));
    assert!(peer.text.starts_with("Wah, ada masalah nih guys."));
    assert_eq!(dosen.topic, peer.topic);
}

#[test]
fn test_complaint_with_related_topic_uses_generic_info() {
    let reply = respond("Nilai UTS jelek", Hierarchy::StudentToStaff, Formality::Formal);
    assert_eq!(reply.intent, Intent::Complaint);
    assert_eq!(
        reply.text,
        "Mohon maaf mengganggu waktu Bapak/Ibu. Ada kendala yang perlu bantuan untuk diselesaikan.\n\nTentang ujian: Untuk informasi tentang ujian, silakan sebutkan lebih spesifik apa yang ingin ditanyakan."
    );
}

#[test]
fn test_complaint_without_topic_asks_for_details() {
    let reply = respond("Aduh pusing", Hierarchy::PeerToPeer, Formality::Casual);
    assert_eq!(reply.intent, Intent::Complaint);
    assert_eq!(
        reply.text,
        "Wah, ada masalah nih guys. Ada yang pernah ngalamin atau tau solusinya? Bisa ceritain lebih detail masalahnya?"
    );
}

#[test]
fn test_inquiry_with_info_names_the_topic() {
    let reply = respond(
        "Info beasiswa apa saja?",
        Hierarchy::StudentToStaff,
        Formality::Formal,
    );
    assert_eq!(reply.intent, Intent::Inquiry);
    assert!(reply
        .text
        .starts_with("Baik, berikut informasi yang Anda butuhkan mengenai beasiswa:\n\nJenis beasiswa:"));
}

#[test]
fn test_inquiry_without_info_suggests_topics() {
    let reply = respond("Apa kabar?", Hierarchy::StudentToDosen, Formality::Casual);
    assert_eq!(reply.intent, Intent::Inquiry);
    assert_eq!(
        reply.text,
        "Baik Pak/Bu, ini penjelasan tentang hal tersebut. Bisa lebih spesifik pertanyaannya? Misalnya: daftar ulang, SPP, beasiswa, jadwal, dll."
    );
}

#[test]
fn test_greeting_is_the_bare_phrase() {
    let reply = respond(
        "Halo, selamat pagi!",
        Hierarchy::StudentToDosen,
        Formality::Formal,
    );
    assert_eq!(reply.intent, Intent::Greeting);
    assert_eq!(
        reply.text,
        base_phrase(Hierarchy::StudentToDosen, Formality::Formal, Intent::Greeting)
    );
}

#[test]
fn test_praise_ignores_the_topic() {
    let reply = respond(
        "Makasih info wifinya",
        Hierarchy::StudentToStaff,
        Formality::Casual,
    );
    assert_eq!(reply.intent, Intent::Praise);
    assert_eq!(reply.topic.topic, "wifi");
    assert_eq!(
        reply.text,
        "Makasih banyak kak! Helpful banget, appreciate it! 😊"
    );
}
