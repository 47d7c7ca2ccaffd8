//! Literal UI string tables, one per supported language.

/// Every user-visible string the calculator renders.
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub personal_info: &'static str,
    pub age: &'static str,
    pub age_placeholder: &'static str,
    pub gender: &'static str,
    pub weight: &'static str,
    pub weight_placeholder: &'static str,
    pub height: &'static str,
    pub height_placeholder: &'static str,
    pub activity_level: &'static str,
    pub sedentary: &'static str,
    pub light: &'static str,
    pub moderate: &'static str,
    pub active: &'static str,
    pub very_active: &'static str,
    pub calculate_button: &'static str,
    pub results: &'static str,
    pub bmr: &'static str,
    pub bmr_description: &'static str,
    pub tdee: &'static str,
    pub tdee_description: &'static str,
    pub weight_management: &'static str,
    pub weight_loss: &'static str,
    pub weight_gain: &'static str,
    pub weight_management_description: &'static str,
    pub enter_info_message: &'static str,
    pub language_selector: &'static str,
    pub please_fill_fields: &'static str,
    pub theme_selector: &'static str,
    pub select_theme: &'static str,
    pub custom_colors: &'static str,
    pub background_start: &'static str,
    pub background_end: &'static str,
    pub button_color: &'static str,
    pub apply_colors: &'static str,
    pub reset_colors: &'static str,
}

pub static EN: Translations = Translations {
    title: "TDEE & BMR Calculator",
    subtitle: "Calculate your Basal Metabolic Rate (BMR) and Total Daily Energy Expenditure (TDEE)",
    personal_info: "Personal Information",
    age: "Age (years)",
    age_placeholder: "Enter your age",
    gender: "Gender",
    weight: "Weight (kg)",
    weight_placeholder: "Enter your weight in kg",
    height: "Height (cm)",
    height_placeholder: "Enter your height in cm",
    activity_level: "Activity Level",
    sedentary: "Sedentary (little or no exercise)",
    light: "Lightly active (light exercise 1-3 days/week)",
    moderate: "Moderately active (moderate exercise 3-5 days/week)",
    active: "Very active (hard exercise 6-7 days/week)",
    very_active: "Extra active (very hard exercise, physical job)",
    calculate_button: "Calculate TDEE & BMR",
    results: "Your Results",
    bmr: "Basal Metabolic Rate (BMR)",
    bmr_description: "This is the number of calories your body burns at rest to maintain basic life functions.",
    tdee: "Total Daily Energy Expenditure (TDEE)",
    tdee_description: "This is the total number of calories you burn each day including all activities.",
    weight_management: "Weight Management",
    weight_loss: "Weight Loss",
    weight_gain: "Weight Gain",
    weight_management_description: "±500 calories from your TDEE for weight loss or gain goals.",
    enter_info_message: "Enter your information and click calculate to see your results",
    language_selector: "Language",
    please_fill_fields: "Please fill in the following fields",
    theme_selector: "Theme",
    select_theme: "Select Theme",
    custom_colors: "Custom Colors",
    background_start: "Background Start",
    background_end: "Background End",
    button_color: "Button Color",
    apply_colors: "Apply Colors",
    reset_colors: "Reset Colors",
};

pub static ZH_TW: Translations = Translations {
    title: "TDEE & BMR 計算器",
    subtitle: "計算您的基礎代謝率 (BMR) 和每日總熱量消耗 (TDEE)",
    personal_info: "個人資料",
    age: "年齡 (歲)",
    age_placeholder: "請輸入您的年齡",
    gender: "性別",
    weight: "體重 (公斤)",
    weight_placeholder: "請輸入您的體重 (公斤)",
    height: "身高 (公分)",
    height_placeholder: "請輸入您的身高 (公分)",
    activity_level: "活動量",
    sedentary: "久坐不動 (很少或沒有運動)",
    light: "輕度活動 (每週輕度運動 1-3 天)",
    moderate: "中度活動 (每週中度運動 3-5 天)",
    active: "高度活動 (每週劇烈運動 6-7 天)",
    very_active: "極度活動 (劇烈運動，體力勞動工作)",
    calculate_button: "計算 TDEE & BMR",
    results: "您的結果",
    bmr: "基礎代謝率 (BMR)",
    bmr_description: "這是您的身體在休息時維持基本生命功能所消耗的卡路里數。",
    tdee: "每日總熱量消耗 (TDEE)",
    tdee_description: "這是您每天包括所有活動在內所消耗的總卡路里數。",
    weight_management: "體重管理",
    weight_loss: "減重",
    weight_gain: "增重",
    weight_management_description: "從您的 TDEE 增減 500 卡路里以達到減重或增重目標。",
    enter_info_message: "請輸入您的資料並點擊計算以查看結果",
    language_selector: "語言",
    please_fill_fields: "請填寫以下欄位",
    theme_selector: "主題",
    select_theme: "選擇主題",
    custom_colors: "自訂顏色",
    background_start: "背景起始",
    background_end: "背景結束",
    button_color: "按鈕顏色",
    apply_colors: "套用顏色",
    reset_colors: "重置顏色",
};

pub static ZH_CN: Translations = Translations {
    title: "TDEE & BMR 计算器",
    subtitle: "计算您的基础代谢率 (BMR) 和每日总热量消耗 (TDEE)",
    personal_info: "个人信息",
    age: "年龄 (岁)",
    age_placeholder: "请输入您的年龄",
    gender: "性别",
    weight: "体重 (公斤)",
    weight_placeholder: "请输入您的体重 (公斤)",
    height: "身高 (厘米)",
    height_placeholder: "请输入您的身高 (厘米)",
    activity_level: "活动量",
    sedentary: "久坐不动 (很少或没有运动)",
    light: "轻度活动 (每周轻度运动 1-3 天)",
    moderate: "中度活动 (每周中度运动 3-5 天)",
    active: "高度活动 (每周剧烈运动 6-7 天)",
    very_active: "极度活动 (剧烈运动，体力劳动工作)",
    calculate_button: "计算 TDEE & BMR",
    results: "您的结果",
    bmr: "基础代谢率 (BMR)",
    bmr_description: "这是您的身体在休息时维持基本生命功能所消耗的卡路里数。",
    tdee: "每日总热量消耗 (TDEE)",
    tdee_description: "这是您每天包括所有活动在内所消耗的总卡路里数。",
    weight_management: "体重管理",
    weight_loss: "减重",
    weight_gain: "增重",
    weight_management_description: "从您的 TDEE 增减 500 卡路里以达到减重或增重目标。",
    enter_info_message: "请输入您的资料并点击计算以查看结果",
    language_selector: "语言",
    please_fill_fields: "请填写以下字段",
    theme_selector: "主题",
    select_theme: "选择主题",
    custom_colors: "自定义颜色",
    background_start: "背景起始",
    background_end: "背景结束",
    button_color: "按钮颜色",
    apply_colors: "应用颜色",
    reset_colors: "重置颜色",
};

pub static JA: Translations = Translations {
    title: "TDEE & BMR 計算機",
    subtitle: "基礎代謝率 (BMR) と総消費カロリー (TDEE) を計算",
    personal_info: "個人情報",
    age: "年齢 (歳)",
    age_placeholder: "年齢を入力してください",
    gender: "性別",
    weight: "体重 (kg)",
    weight_placeholder: "体重を入力してください (kg)",
    height: "身長 (cm)",
    height_placeholder: "身長を入力してください (cm)",
    activity_level: "活動レベル",
    sedentary: "座りがち (運動なし、またはほとんどなし)",
    light: "軽度の活動 (週1-3日の軽い運動)",
    moderate: "中程度の活動 (週3-5日の中程度の運動)",
    active: "高い活動 (週6-7日の激しい運動)",
    very_active: "非常に高い活動 (激しい運動、肉体労働)",
    calculate_button: "TDEE & BMR を計算",
    results: "結果",
    bmr: "基礎代謝率 (BMR)",
    bmr_description: "これは、基本的な生命機能を維持するために体が安静時に消費するカロリー数です。",
    tdee: "総消費カロリー (TDEE)",
    tdee_description: "これは、すべての活動を含む1日に消費する総カロリー数です。",
    weight_management: "体重管理",
    weight_loss: "減量",
    weight_gain: "増量",
    weight_management_description: "減量または増量の目標のために、TDEEから±500カロリー。",
    enter_info_message: "情報を入力して計算をクリックすると結果が表示されます",
    language_selector: "言語",
    please_fill_fields: "以下の項目を入力してください",
    theme_selector: "テーマ",
    select_theme: "テーマを選択",
    custom_colors: "カスタムカラー",
    background_start: "背景開始",
    background_end: "背景終了",
    button_color: "ボタンカラー",
    apply_colors: "カラーを適用",
    reset_colors: "カラーをリセット",
};
