//! 문자 체계별 테이블 레지스트리

use lazy_static::lazy_static;

use crate::core::script::Script;
use crate::core::tables::{BrahmiTable, SubstitutionTable, ARAMAIC, GREEK, HEBREW, TAMIL};

/// 모든 문자 체계 테이블 묶음
///
/// 한 번 생성한 뒤 읽기 전용 참조로만 코덱에 전달됩니다.
#[derive(Debug, Clone)]
pub struct ScriptRegistry {
    brahmi: BrahmiTable,
    tamil: SubstitutionTable,
    hebrew: SubstitutionTable,
    aramaic: SubstitutionTable,
    greek: SubstitutionTable,
    latin: SubstitutionTable,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self {
            brahmi: BrahmiTable::new(),
            tamil: SubstitutionTable::from_pairs(TAMIL),
            hebrew: SubstitutionTable::from_pairs(HEBREW),
            aramaic: SubstitutionTable::from_pairs(ARAMAIC),
            greek: SubstitutionTable::from_pairs(GREEK),
            latin: SubstitutionTable::latin_capitals(),
        }
    }

    pub fn brahmi(&self) -> &BrahmiTable {
        &self.brahmi
    }

    /// 단순 치환 테이블 조회 (브라흐미는 None)
    pub fn table(&self, script: Script) -> Option<&SubstitutionTable> {
        match script {
            Script::Brahmi => None,
            Script::Tamil => Some(&self.tamil),
            Script::Hebrew => Some(&self.hebrew),
            Script::Aramaic => Some(&self.aramaic),
            Script::Greek => Some(&self.greek),
            Script::Latin => Some(&self.latin),
        }
    }
}

impl Default for ScriptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: ScriptRegistry = ScriptRegistry::new();
}

/// 프로세스 전역 기본 레지스트리 (최초 접근 시 생성)
pub fn registry() -> &'static ScriptRegistry {
    &DEFAULT_REGISTRY
}
