//! # Campus Topics
//!
//! The fixed campus information dictionary and the related-keyword table used to
//! recognise what a message is about. Both are scanned in declaration order and
//! the first hit wins, so the order of the entries below is significant.

use crate::intent::first_hit;
use crate::types::Category;
use serde::{Deserialize, Serialize};

/// One entry of the campus information dictionary.
#[derive(Debug, Clone, Copy)]
pub struct CampusTopic {
    /// The lower-case key searched for inside the message.
    pub key: &'static str,
    pub info: &'static str,
    pub category: Category,
}

pub const CAMPUS_TOPICS: &[CampusTopic] = &[
    // --- Academic affairs ---
    CampusTopic {
        key: "daftar ulang",
        info: "Untuk daftar ulang semester: (1) Login SIAKAD dengan username/password, (2) Isi KRS (Kartu Rencana Studi), (3) Bayar SPP sesuai tagihan, (4) Print KTM (Kartu Tanda Mahasiswa). Deadline biasanya 2 minggu setelah semester dimulai. Kalau telat, kena denda Rp 50.000.",
        category: Category::Academic,
    },
    CampusTopic {
        key: "krs",
        info: "KRS (Kartu Rencana Studi) diisi online di SIAKAD. Maksimal 24 SKS per semester (20 SKS kalau IP < 2.75). Bisa add/drop mata kuliah dalam 2 minggu pertama kuliah. Konsultasi dosen wali wajib sebelum finalisasi KRS.",
        category: Category::Academic,
    },
    CampusTopic {
        key: "transkrip",
        info: "Transkrip nilai bisa diambil di bagian akademik lantai 2 gedung rektorat. Syarat: fotokopi KTM, biaya Rp 25.000. Kalau online, bisa download di SIAKAD menu \"Transkrip\" (tersedia 1 minggu setelah nilai keluar).",
        category: Category::Academic,
    },
    CampusTopic {
        key: "wisuda",
        info: "Pendaftaran wisuda: (1) Sudah lulus semua mata kuliah, (2) IPK minimal 2.00, (3) Tidak ada tunggakan SPP, (4) Daftar online di SIAKAD, (5) Bayar biaya wisuda Rp 500.000. Deadline pendaftaran 2 bulan sebelum acara wisuda.",
        category: Category::Academic,
    },
    // --- Financial ---
    CampusTopic {
        key: "spp",
        info: "Pembayaran SPP bisa melalui: (1) Bank BNI, BRI, Mandiri dengan kode billing dari SIAKAD, (2) Internet banking, (3) Kasir kampus (lantai 1 gedung rektorat, jam 08:00-15:00). Deadline tanggal 25 setiap bulan, telat kena denda 2% per bulan.",
        category: Category::Financial,
    },
    CampusTopic {
        key: "beasiswa",
        info: "Jenis beasiswa: (1) Beasiswa PPA (IPK min 3.00), (2) Beasiswa Bidikmisi, (3) Beasiswa prestasi. Info lengkap di website kampus bagian kemahasiswaan atau datang ke lantai 3 gedung rektorat. Pendaftaran biasanya semester ganjil (Agustus-September).",
        category: Category::Financial,
    },
    CampusTopic {
        key: "cicilan",
        info: "SPP bisa dicicil 2x per semester dengan syarat: (1) Mengajukan surat permohonan ke bagian keuangan, (2) Ada persetujuan orang tua/wali, (3) Cicilan 1: 60% di awal semester, Cicilan 2: 40% sebelum UTS. Biaya admin Rp 50.000 per cicilan.",
        category: Category::Financial,
    },
    // --- Facilities ---
    CampusTopic {
        key: "wifi",
        info: "WiFi kampus: SSID \"KAMPUS-WIFI\", password \"kampus2024\" (berubah setiap semester). Kalau koneksi lemot: (1) Restart device, (2) Pindah lokasi (hotspot terbaik: perpustakaan, lobby utama), (3) Lapor ke IT Support lantai 1 kalau masih bermasalah.",
        category: Category::Facilities,
    },
    CampusTopic {
        key: "perpustakaan",
        info: "Perpustakaan buka Senin-Jumat 07:00-21:00, Sabtu 08:00-17:00. Fasilitas: ruang baca, komputer, WiFi, AC. Peminjaman buku: maksimal 3 buku, 7 hari. Denda telat Rp 1.000/hari/buku. Akses e-journal tersedia 24/7 via website perpustakaan.",
        category: Category::Facilities,
    },
    CampusTopic {
        key: "lab",
        info: "Lab komputer tersedia di gedung C lantai 2-3. Booking online di website atau langsung ke petugas lab. Jam operasional: 08:00-16:00 (hari kerja). Software tersedia: Office, Visual Studio, Photoshop, AutoCAD. Print/scan: Rp 500/lembar.",
        category: Category::Facilities,
    },
    CampusTopic {
        key: "parkir",
        info: "Area parkir: (1) Motor: area belakang gedung A, B, C (gratis), (2) Mobil: depan gedung rektorat (Rp 5.000/hari). Jam buka 06:00-22:00. Wajib pakai helm, kunci motor, dan simpan STNK. Keamanan 24 jam.",
        category: Category::Facilities,
    },
    // --- Student services ---
    CampusTopic {
        key: "ktm",
        info: "KTM (Kartu Tanda Mahasiswa) dibuat saat daftar ulang. Kalau hilang: (1) Lapor ke bagian kemahasiswaan, (2) Buat surat keterangan hilang, (3) Bayar biaya penggantian Rp 25.000, (4) Foto 3x4 background merah, (5) Tunggu 3-5 hari kerja.",
        category: Category::Services,
    },
    CampusTopic {
        key: "surat",
        info: "Jenis surat yang bisa diurus: (1) Surat keterangan mahasiswa aktif, (2) Surat keterangan kelakuan baik, (3) Surat rekomendasi. Syarat: KTM, biaya Rp 10.000-25.000. Proses 2-3 hari kerja. Ambil di bagian kemahasiswaan lantai 3.",
        category: Category::Services,
    },
    CampusTopic {
        key: "skripsi",
        info: "Proses skripsi: (1) Seminar proposal (semester 7), (2) Penelitian & bimbingan, (3) Seminar hasil, (4) Sidang skripsi. Syarat sidang: min 140 SKS, IPK 2.00, bebas tunggakan. Bimbingan minimal 8x dengan dosen pembimbing. Deadline upload ke repository 1 minggu setelah sidang.",
        category: Category::Academic,
    },
    // --- Schedule & events ---
    CampusTopic {
        key: "jadwal",
        info: "Jadwal kuliah bisa dilihat di: (1) SIAKAD menu \"Jadwal Kuliah\", (2) Papan pengumuman fakultas, (3) WhatsApp grup kelas. Kalau ada perubahan jadwal, akan diumumkan H-1. Jam kuliah: 07:00-18:00 (8 slot waktu @90 menit).",
        category: Category::Academic,
    },
    CampusTopic {
        key: "libur",
        info: "Kalender akademik: (1) Libur semester: Januari & Juli, (2) Libur nasional sesuai pemerintah, (3) Libur Dies Natalis kampus (Mei), (4) Cuti bersama (biasanya lebaran & tahun baru). Cek website resmi untuk update kalender akademik.",
        category: Category::General,
    },
    // --- Health & counseling ---
    CampusTopic {
        key: "kesehatan",
        info: "Poliklinik kampus (gedung D lantai 1): Senin-Jumat 08:00-15:00. Fasilitas: pemeriksaan umum, P3K, obat-obatan dasar. Gratis untuk mahasiswa (tunjukkan KTM). Kalau sakit serius, ada rujukan ke RS terdekat dengan surat pengantar.",
        category: Category::Services,
    },
    CampusTopic {
        key: "konseling",
        info: "Layanan konseling psikologi tersedia di gedung rektorat lantai 3. Gratis dan rahasia untuk mahasiswa. Konsultasi: masalah akademik, personal, karir. Buat janji via WhatsApp atau datang langsung. Konselor tersedia Senin, Rabu, Jumat (09:00-15:00).",
        category: Category::Services,
    },
];

/// Broader topics recognised only through related words, tried after the dictionary.
pub const RELATED_TOPICS: &[(&str, &[&str])] = &[
    ("nilai", &["grade", "ip", "ipk", "hasil", "score"]),
    (
        "dosen",
        &["profesor", "guru", "pengajar", "lecturer", "pembimbing"],
    ),
    ("ujian", &["uts", "uas", "quiz", "test", "exam", "kuis"]),
    (
        "mata kuliah",
        &["matkul", "course", "subject", "pelajaran"],
    ),
    ("semester", &["sem", "catur wulan"]),
    ("kampus", &["universitas", "college", "univ"]),
    ("administrasi", &["admin", "surat", "berkas", "dokumen"]),
];

/// The topic name used when nothing matched.
pub const GENERAL_TOPIC: &str = "general";

/// The outcome of topic detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMatch {
    pub topic: String,
    /// Informational text for the topic; empty when nothing matched.
    pub info: String,
    pub category: Category,
}

impl TopicMatch {
    fn general() -> Self {
        Self {
            topic: GENERAL_TOPIC.to_string(),
            info: String::new(),
            category: Category::General,
        }
    }

    pub fn has_specific_info(&self) -> bool {
        !self.info.is_empty()
    }

    pub fn is_general(&self) -> bool {
        self.topic == GENERAL_TOPIC
    }
}

/// Detects the campus topic a message is about.
pub fn detect_topic(message: &str) -> TopicMatch {
    let lower = message.to_lowercase();

    if let Some(entry) = CAMPUS_TOPICS.iter().find(|t| lower.contains(t.key)) {
        return TopicMatch {
            topic: entry.key.to_string(),
            info: entry.info.to_string(),
            category: entry.category,
        };
    }

    if let Some((topic, _)) = RELATED_TOPICS
        .iter()
        .find(|(_, keywords)| first_hit(&lower, keywords).is_some())
    {
        return TopicMatch {
            topic: topic.to_string(),
            info: format!(
                "Untuk informasi tentang {topic}, silakan sebutkan lebih spesifik apa yang ingin ditanyakan."
            ),
            category: Category::General,
        };
    }

    TopicMatch::general()
}
