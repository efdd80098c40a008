//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 부팅 과정(설정 로드, DB 연결, 인덱스 생성)을 단계별로 보여줍니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              Organic Auth Backend                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 부팅 단계 시작 표시
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 부팅 단계 완료 표시
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 하위 항목 상태 표시
///
/// ```text
///    ├─ users: email_unique, name_unique
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}
