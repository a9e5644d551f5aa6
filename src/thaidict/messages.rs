//! User-facing Thai messages.

pub const WORD_NOT_FOUND: &str = "ไม่พบคำศัพท์นี้";
pub const WORD_NOT_IN_SYSTEM: &str = "ไม่พบคำศัพท์นี้ในระบบ";
pub const CORRECT: &str = "ถูกต้อง! 🎉";
pub const KEY_MISMATCH: &str = "คำศัพท์ไม่ตรงกับที่ต้องการอัพเดท";
pub const ALL_DELETED: &str = "ลบคำศัพท์ทั้งหมดเรียบร้อยแล้ว";
pub const NO_VALID_ROWS: &str = "ไม่พบข้อมูลที่ถูกต้องในไฟล์";

pub fn incorrect(answer: &str) -> String {
    format!("ไม่ถูกต้อง คำแปลที่ถูกต้องคือ: {}", answer)
}

pub fn added(english: &str) -> String {
    format!("เพิ่มคำว่า '{}' เรียบร้อยแล้ว", english)
}

pub fn updated(english: &str) -> String {
    format!("อัพเดทคำว่า '{}' เรียบร้อยแล้ว", english)
}

pub fn deleted(english: &str) -> String {
    format!("ลบคำว่า '{}' เรียบร้อยแล้ว", english)
}

pub fn duplicate(english: &str) -> String {
    format!("คำว่า '{}' มีอยู่ในพจนานุกรมแล้ว", english)
}

pub fn sorted(field: &str) -> String {
    format!("เรียงคำศัพท์ตาม {} เรียบร้อยแล้ว", field)
}

pub fn imported(imported: usize, skipped: usize) -> String {
    format!(
        "นำเข้าคำศัพท์ {} คำ (ข้ามคำที่ซ้ำ {} คำ)",
        imported, skipped
    )
}
