//! PCR amplification rules

use crate::check::{ConditionalCheck, EnumStatusCheck, RequiredCheck, TieredRangeCheck};
use crate::rule::ValidationRule;
use crate::standards::{AMPLIFICATION_EFFICIENCY, BAND_SIZE, CT_VALUE, PCR_PRODUCT};
use seqlims_model::ValidationLevel;

/// Rules for PCR amplification records
///
/// Required: `sampleCode`, `pcrProduct`, `amplificationSuccess`. `bandSize` is
/// only expected when `amplificationSuccess` is `success`.
#[must_use]
pub fn pcr_amplification_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::new("sample_code_required", "sampleCode", RequiredCheck::new("样本编号"))
            .with_description("样本编号不能为空"),
        ValidationRule::new(
            "pcr_product_range",
            "pcrProduct",
            TieredRangeCheck::new("PCR产物浓度", PCR_PRODUCT)
                .required()
                .low_suggestion("建议优化扩增条件或增加循环数"),
        )
        .with_description("PCR产物浓度需在 5-500 ng/μL 之间"),
        ValidationRule::new(
            "amplification_status",
            "amplificationSuccess",
            EnumStatusCheck::new("扩增结果")
                .required()
                .accept("success")
                .map("partial", ValidationLevel::Info, "部分扩增，建议结合电泳结果判断")
                .map("failed", ValidationLevel::Warning, "扩增失败，建议重新实验"),
        )
        .with_description("扩增结果: success / partial / failed"),
        ValidationRule::new(
            "band_size_when_success",
            "bandSize",
            ConditionalCheck::when(
                "amplificationSuccess",
                "success",
                "扩增成功时建议记录条带大小",
                TieredRangeCheck::new("条带大小", BAND_SIZE)
                    .low_hint("请核对引物设计")
                    .high_hint("可能为非特异性扩增")
                    .above_optimal_hint("请确认延伸时间是否充足"),
            ),
        )
        .with_description("扩增成功时记录条带大小 (bp)"),
        ValidationRule::new(
            "amplification_efficiency_range",
            "amplificationEfficiency",
            TieredRangeCheck::new("扩增效率", AMPLIFICATION_EFFICIENCY)
                .low_hint("可能存在抑制剂或引物效率不足")
                .high_hint("可能存在引物二聚体或非特异性扩增")
                .above_optimal_hint("请检查标准曲线"),
        )
        .with_description("扩增效率应在 90-110% 之间"),
        ValidationRule::new(
            "ct_value_range",
            "ctValue",
            TieredRangeCheck::new("Ct值", CT_VALUE)
                .low_hint("可能存在模板过量或污染")
                .high_hint("扩增结果不可靠")
                .above_optimal_hint("模板量可能不足"),
        )
        .with_description("Ct 值应在 10-35 之间"),
    ]
}
