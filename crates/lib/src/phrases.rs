//! # Canned Phrases
//!
//! One opening phrase per hierarchy, formality and intent. The responder appends
//! topic information to these where the intent calls for it.

use crate::types::{Formality, Hierarchy, Intent};

/// Returns the canned phrase for a conversation setting and intent.
pub fn base_phrase(hierarchy: Hierarchy, formality: Formality, intent: Intent) -> &'static str {
    use Formality::*;
    use Hierarchy::*;
    use Intent::*;

    match (hierarchy, formality, intent) {
        // --- Student to staff ---
        (StudentToStaff, Casual, Complaint) => {
            "Maaf ya kak, ada masalah nih. Bisa bantu cariin solusinya? 😔"
        }
        (StudentToStaff, Casual, Inquiry) => "Hai kak! Ini info yang kamu butuhkan tentang",
        (StudentToStaff, Casual, Praise) => {
            "Makasih banyak kak! Helpful banget, appreciate it! 😊"
        }
        (StudentToStaff, Casual, Greeting) => "Hai kak! Ada yang bisa dibantu hari ini?",
        (StudentToStaff, Casual, Farewell) => {
            "Oke kak, semoga membantu ya! Kalau ada yang lain, tinggal chat lagi 😊"
        }
        (StudentToStaff, Formal, Complaint) => {
            "Mohon maaf mengganggu waktu Bapak/Ibu. Ada kendala yang perlu bantuan untuk diselesaikan."
        }
        (StudentToStaff, Formal, Inquiry) => {
            "Baik, berikut informasi yang Anda butuhkan mengenai"
        }
        (StudentToStaff, Formal, Praise) => {
            "Terima kasih banyak atas bantuan Bapak/Ibu. Sangat membantu sekali."
        }
        (StudentToStaff, Formal, Greeting) => {
            "Selamat pagi/siang Bapak/Ibu. Ada yang bisa saya bantu?"
        }
        (StudentToStaff, Formal, Farewell) => {
            "Terima kasih atas waktunya. Semoga informasi ini bermanfaat."
        }

        // --- Student to lecturer ---
        (StudentToDosen, Casual, Complaint) => {
            "Maaf Pak/Bu, ada kendala nih dengan proses ini. Mohon bimbingannya 🙏"
        }
        (StudentToDosen, Casual, Inquiry) => "Baik Pak/Bu, ini penjelasan tentang",
        (StudentToDosen, Casual, Praise) => {
            "Terima kasih banyak atas bimbingan Bapak/Ibu. Sangat berharga sekali 🙏"
        }
        (StudentToDosen, Casual, Greeting) => {
            "Selamat pagi/siang Pak/Bu. Mohon izin untuk bertanya."
        }
        (StudentToDosen, Casual, Farewell) => {
            "Terima kasih atas waktu dan bimbingannya, Pak/Bu."
        }
        (StudentToDosen, Formal, Complaint) => {
            "Dengan hormat Bapak/Ibu Dosen. Saya mengalami kendala dan mohon arahan dari Bapak/Ibu."
        }
        (StudentToDosen, Formal, Inquiry) => "Dengan hormat, berikut penjelasan mengenai",
        (StudentToDosen, Formal, Praise) => {
            "Terima kasih yang sebesar-besarnya atas bimbingan dan ilmu yang Bapak/Ibu berikan. Sangat bermanfaat."
        }
        (StudentToDosen, Formal, Greeting) => {
            "Dengan hormat Bapak/Ibu Dosen. Perkenalkan saya [nama], mohon izin untuk berkonsultasi."
        }
        (StudentToDosen, Formal, Farewell) => {
            "Sekali lagi terima kasih atas bimbingan Bapak/Ibu. Salam hormat."
        }

        // --- Peer to peer ---
        (PeerToPeer, Casual, Complaint) => {
            "Wah, ada masalah nih guys. Ada yang pernah ngalamin atau tau solusinya?"
        }
        (PeerToPeer, Casual, Inquiry) => "Nih info yang lu cari tentang",
        (PeerToPeer, Casual, Praise) => "Thanks banget ya bro/sis! Lu helpful sekali 😄",
        (PeerToPeer, Casual, Greeting) => "Hai guys! Ada yang online? Need help nih 😅",
        (PeerToPeer, Casual, Farewell) => "Oke thanks ya! See you around 👋",
        (PeerToPeer, Formal, Complaint) => {
            "Permisi teman-teman, ada yang bisa bantu dengan masalah ini?"
        }
        (PeerToPeer, Formal, Inquiry) => "Baik, ini informasi yang dibutuhkan tentang",
        (PeerToPeer, Formal, Praise) => {
            "Terima kasih teman-teman atas bantuannya. Sangat membantu!"
        }
        (PeerToPeer, Formal, Greeting) => {
            "Halo semuanya, ada yang bisa membantu dengan pertanyaan saya?"
        }
        (PeerToPeer, Formal, Farewell) => "Terima kasih atas bantuannya. Sampai jumpa!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_setting_has_its_own_phrase() {
        let intents = [
            Intent::Greeting,
            Intent::Farewell,
            Intent::Complaint,
            Intent::Praise,
            Intent::Inquiry,
        ];
        let mut seen = HashSet::new();
        for h in Hierarchy::ALL {
            for f in Formality::ALL {
                for i in intents {
                    let phrase = base_phrase(h, f, i);
                    assert!(!phrase.is_empty());
                    assert!(seen.insert(phrase), "duplicate phrase for {h}/{f}/{i}");
                }
            }
        }
        assert_eq!(seen.len(), 30);
    }
}
