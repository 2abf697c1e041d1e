//! Library construction rules

use crate::check::{ConditionalCheck, EnumStatusCheck, RequiredCheck, TieredRangeCheck};
use crate::rule::ValidationRule;
use crate::standards::{
    ADAPTER_DIMER_RATIO, FRAGMENT_SIZE, LIBRARY_CONCENTRATION, MOLAR_CONCENTRATION,
};
use seqlims_model::ValidationLevel;

/// Rules for library construction records
///
/// Required: `sampleCode`, `libraryConcentration`, `fragmentSize`, `qcStatus`.
/// `molarConcentration` is expected once the library passed QC.
#[must_use]
pub fn library_construction_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::new("sample_code_required", "sampleCode", RequiredCheck::new("样本编号"))
            .with_description("样本编号不能为空"),
        ValidationRule::new(
            "library_concentration_range",
            "libraryConcentration",
            TieredRangeCheck::new("文库浓度", LIBRARY_CONCENTRATION)
                .required()
                .low_hint("可能无法满足上机要求")
                .low_suggestion("建议增加PCR循环数或重新构建文库"),
        )
        .with_description("文库浓度需在 2-100 ng/μL 之间"),
        ValidationRule::new(
            "fragment_size_range",
            "fragmentSize",
            TieredRangeCheck::new("片段大小", FRAGMENT_SIZE)
                .required()
                .low_hint("可能影响测序读长")
                .high_hint("请检查片段化条件")
                .above_optimal_hint("建议优化片段化时间"),
        )
        .with_description("片段大小需在 200-800 bp 之间，最佳 300-500 bp"),
        ValidationRule::new(
            "molar_concentration_when_passed",
            "molarConcentration",
            ConditionalCheck::when(
                "qcStatus",
                "pass",
                "质检通过的文库建议记录摩尔浓度",
                TieredRangeCheck::new("文库摩尔浓度", MOLAR_CONCENTRATION)
                    .low_hint("可能无法满足上机要求"),
            ),
        )
        .with_description("质检通过后记录文库摩尔浓度 (nM)"),
        ValidationRule::new(
            "adapter_dimer_ratio_range",
            "adapterDimerRatio",
            TieredRangeCheck::new("接头二聚体比例", ADAPTER_DIMER_RATIO)
                .high_hint("将严重影响测序数据产出")
                .above_optimal_hint("建议进行磁珠纯化"),
        )
        .with_description("接头二聚体比例应低于 5%"),
        ValidationRule::new(
            "qc_status",
            "qcStatus",
            EnumStatusCheck::new("文库质检结果")
                .required()
                .accept("pass")
                .map("pending", ValidationLevel::Info, "文库质检尚未完成")
                .map("warning", ValidationLevel::Warning, "文库质检存在风险，请复核")
                .map("fail", ValidationLevel::Error, "文库质检不合格，需重新构建"),
        )
        .with_description("文库质检结果: pass / pending / warning / fail"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seqlims_model::{Record, ValidationResult};

    fn run(record: &Record) -> Vec<ValidationResult> {
        library_construction_rules()
            .iter()
            .filter_map(|rule| rule.evaluate(record))
            .collect()
    }

    fn passed_library() -> Record {
        Record::new()
            .with("sampleCode", "LIB001")
            .with("libraryConcentration", 20.0)
            .with("fragmentSize", 350)
            .with("molarConcentration", 10.0)
            .with("adapterDimerRatio", 0.5)
            .with("qcStatus", "pass")
    }

    #[test]
    fn clean_library_has_no_findings() {
        assert!(run(&passed_library()).is_empty());
    }

    #[test]
    fn qc_status_table_differs_from_pcr() {
        let level = |status: &str| {
            run(&passed_library().with("qcStatus", status))
                .into_iter()
                .find(|r| r.field == "qcStatus")
                .map(|r| r.level)
        };
        assert_eq!(level("pass"), None);
        assert_eq!(level("pending"), Some(ValidationLevel::Info));
        assert_eq!(level("warning"), Some(ValidationLevel::Warning));
        assert_eq!(level("fail"), Some(ValidationLevel::Error));
        assert_eq!(level("failed"), Some(ValidationLevel::Warning));
    }

    #[test]
    fn molar_concentration_expected_after_pass() {
        let mut record = passed_library();
        record.remove("molarConcentration");
        let results = run(&record);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].field, "molarConcentration");
        assert_eq!(results[0].level, ValidationLevel::Warning);

        let pending = record.with("qcStatus", "pending");
        let fields: Vec<String> = run(&pending).into_iter().map(|r| r.field).collect();
        assert_eq!(fields, vec!["qcStatus".to_string()]);
    }

    #[test]
    fn adapter_dimer_tiers() {
        let level = |v: f64| {
            run(&passed_library().with("adapterDimerRatio", v))
                .into_iter()
                .find(|r| r.field == "adapterDimerRatio")
                .map(|r| r.level)
        };
        assert_eq!(level(-1.0), Some(ValidationLevel::Error));
        assert_eq!(level(8.0), Some(ValidationLevel::Error));
        assert_eq!(level(3.0), Some(ValidationLevel::Info));
        assert_eq!(level(0.0), None);
    }
}
