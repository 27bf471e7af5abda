//! Built-in translations for the canteen catalog and the interface

use super::{option_value_key, Domain, LocalizationTable, Translation};

/// Dish names (canonical key, zh, en)
const DISHES: &[(&str, &str, &str)] = &[
    ("Fried Rice", "炒饭", "Fried Rice"),
    ("Egg Fried Rice", "蛋炒饭", "Egg Fried Rice"),
    ("Beef Noodles", "牛肉面", "Beef Noodles"),
    ("Spicy Chicken", "辣子鸡", "Spicy Chicken"),
    ("Sweet and Sour Pork", "糖醋里脊", "Sweet and Sour Pork"),
    ("Mapo Tofu", "麻婆豆腐", "Mapo Tofu"),
    ("Tomato Egg Stir-fry", "西红柿鸡蛋", "Tomato Egg Stir-fry"),
    ("Dumplings", "饺子", "Dumplings"),
    ("Beef Rice Bowl", "牛肉盖饭", "Beef Rice Bowl"),
    ("Pork Rice Bowl", "猪肉盖饭", "Pork Rice Bowl"),
    ("Chicken Rice Bowl", "鸡肉盖饭", "Chicken Rice Bowl"),
    ("Cold Noodles", "凉面", "Cold Noodles"),
    ("Hot Dry Noodles", "热干面", "Hot Dry Noodles"),
    ("Fried Noodles", "炒面", "Fried Noodles"),
    ("Fish Fillet Rice", "鱼片盖饭", "Fish Fillet Rice"),
    ("Spicy Hot Pot", "麻辣烫", "Spicy Hot Pot"),
    ("Curry Chicken Rice", "咖喱鸡饭", "Curry Chicken Rice"),
    ("Curry Beef Rice", "咖喱牛肉饭", "Curry Beef Rice"),
    ("Milk Tea", "奶茶", "Milk Tea"),
    ("Fruit Tea", "水果茶", "Fruit Tea"),
    ("Soy Milk", "豆浆", "Soy Milk"),
    ("Youtiao", "油条", "Youtiao"),
    ("Steamed Bun", "包子", "Steamed Bun"),
    ("Pancake Roll", "煎饼", "Pancake Roll"),
    ("BBQ Skewers", "烧烤串", "BBQ Skewers"),
    ("Grilled Fish", "烤鱼", "Grilled Fish"),
    ("Vegetable Salad", "蔬菜沙拉", "Vegetable Salad"),
    ("Fruit Platter", "水果拼盘", "Fruit Platter"),
    ("Cake Slice", "蛋糕", "Cake Slice"),
    ("Ice Cream", "冰淇淋", "Ice Cream"),
    ("Braised Pork Belly", "红烧肉", "Braised Pork Belly"),
    ("Kung Pao Chicken", "宫保鸡丁", "Kung Pao Chicken"),
    ("Szechuan Fish", "水煮鱼", "Szechuan Fish"),
    ("Steamed Egg Custard", "蒸蛋羹", "Steamed Egg Custard"),
    ("Wonton Soup", "馄饨汤", "Wonton Soup"),
    ("Pork Ribs Soup", "排骨汤", "Pork Ribs Soup"),
    ("Stir-fried Green Beans", "炒豆角", "Stir-fried Green Beans"),
    ("Eggplant with Garlic", "蒜蓉茄子", "Eggplant with Garlic"),
    ("Braised Tofu", "红烧豆腐", "Braised Tofu"),
    ("Fried Shrimp", "炸虾", "Fried Shrimp"),
    ("Steamed Buns (Pork)", "猪肉包子", "Steamed Buns (Pork)"),
    ("Steamed Buns (Vegetable)", "素菜包子", "Steamed Buns (Vegetable)"),
    ("Scallion Pancake", "葱油饼", "Scallion Pancake"),
    ("Congee with Pork", "猪肉粥", "Congee with Pork"),
    ("Congee with Century Egg", "皮蛋粥", "Congee with Century Egg"),
    ("BBQ Pork", "叉烧", "BBQ Pork"),
    ("Grilled Lamb Skewers", "羊肉串", "Grilled Lamb Skewers"),
    ("Grilled Squid", "烤鱿鱼", "Grilled Squid"),
    ("Mango Pudding", "芒果布丁", "Mango Pudding"),
    ("Red Bean Soup", "红豆汤", "Red Bean Soup"),
    ("Sesame Balls", "芝麻球", "Sesame Balls"),
    ("Taro Balls", "芋圆", "Taro Balls"),
    ("Fresh Orange Juice", "鲜榨橙汁", "Fresh Orange Juice"),
    ("Lemon Honey Tea", "柠檬蜂蜜茶", "Lemon Honey Tea"),
    ("Iced Coffee", "冰咖啡", "Iced Coffee"),
    ("Smoothie (Mixed Fruits)", "水果冰沙", "Smoothie (Mixed Fruits)"),
    ("Bubble Tea (Taro)", "芋头奶茶", "Bubble Tea (Taro)"),
    ("Green Tea", "绿茶", "Green Tea"),
    ("Jasmine Tea", "茉莉花茶", "Jasmine Tea"),
    ("Herbal Tea", "花草茶", "Herbal Tea"),
];

const CANTEENS: &[(&str, &str, &str)] = &[
    ("Main Canteen", "主食堂", "Main Canteen"),
    ("North Canteen", "北区食堂", "North Canteen"),
    ("South Canteen", "南区食堂", "South Canteen"),
];

/// Stall names
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Rice Stall 1", "米饭档口1", "Rice Stall 1"),
    ("Rice Stall 2", "米饭档口2", "Rice Stall 2"),
    ("Noodle Stall 1", "面条档口1", "Noodle Stall 1"),
    ("Noodle Stall 2", "面条档口2", "Noodle Stall 2"),
    ("Spicy Stall 1", "辣味档口1", "Spicy Stall 1"),
    ("Spicy Stall 2", "辣味档口2", "Spicy Stall 2"),
    ("Vegetarian Stall", "素食档口", "Vegetarian Stall"),
    ("Dessert Stall 1", "甜品档口1", "Dessert Stall 1"),
    ("Dessert Stall 2", "甜品档口2", "Dessert Stall 2"),
    ("Drink Stall", "饮品档口", "Drink Stall"),
    ("BBQ Stall 1", "烧烤档口1", "BBQ Stall 1"),
    ("BBQ Stall 2", "烧烤档口2", "BBQ Stall 2"),
    ("Soup Stall", "汤品档口", "Soup Stall"),
    ("Western Stall", "西式档口", "Western Stall"),
    ("Breakfast Stall 1", "早餐档口1", "Breakfast Stall 1"),
    ("Breakfast Stall 2", "早餐档口2", "Breakfast Stall 2"),
    ("Breakfast Stall 3", "早餐档口3", "Breakfast Stall 3"),
    ("Snack Stall 1", "小食档口1", "Snack Stall 1"),
    ("Snack Stall 2", "小食档口2", "Snack Stall 2"),
    ("Fruit Stall", "水果档口", "Fruit Stall"),
    ("Specialty Stall", "特色档口", "Specialty Stall"),
    ("Rice Stall 3", "米饭档口3", "Rice Stall 3"),
    ("Spicy Stall 3", "辣味档口3", "Spicy Stall 3"),
    ("BBQ Stall 3", "烧烤档口3", "BBQ Stall 3"),
    ("Dessert Stall 3", "甜品档口3", "Dessert Stall 3"),
];

/// Option group titles by `option_type`
const OPTION_NAMES: &[(&str, &str, &str)] = &[
    ("add_egg", "加蛋", "Add Egg"),
    ("add_sausage", "加火腿肠", "Add Sausage"),
    ("add_meat", "加肉", "Add Meat"),
    ("spicy_level", "辣度", "Spicy Level"),
    ("temperature", "温度", "Temperature"),
    ("sugar_level", "糖度", "Sugar Level"),
];

/// Option value labels (option_type, value, zh, en)
const OPTION_VALUES: &[(&str, &str, &str, &str)] = &[
    ("add_egg", "yes", "是", "Yes"),
    ("add_egg", "no", "否", "No"),
    ("add_sausage", "yes", "是", "Yes"),
    ("add_sausage", "no", "否", "No"),
    ("add_meat", "yes", "是", "Yes"),
    ("add_meat", "no", "否", "No"),
    ("spicy_level", "no", "不辣", "Not Spicy"),
    ("spicy_level", "mild", "微辣", "Mild"),
    ("spicy_level", "medium", "中辣", "Medium"),
    ("spicy_level", "hot", "重辣", "Hot"),
    ("temperature", "ice", "冰的", "Iced"),
    ("temperature", "less_ice", "少冰", "Less Ice"),
    ("temperature", "no_ice", "去冰", "No Ice"),
    ("temperature", "hot", "热的", "Hot"),
    ("sugar_level", "no_sugar", "不额外加糖", "No Extra Sugar"),
    ("sugar_level", "half", "五分糖", "50% Sugar"),
    ("sugar_level", "seven", "七分糖", "70% Sugar"),
    ("sugar_level", "full", "满糖", "Full Sugar"),
];

/// Interface strings (key, zh, en)
const UI: &[(&str, &str, &str)] = &[
    ("nav_menu", "浏览菜单", "Menu"),
    ("nav_rec", "每日推荐", "Recommendations"),
    ("nav_order", "我的订单", "Orders"),
    ("header_menu", "所有食堂", "All Canteens"),
    ("header_canteen", "食堂列表", "Canteens"),
    ("header_cart", "购物车", "Cart"),
    ("select_hint", "请在左侧选择菜品查看详情", "Select a dish to view details"),
    ("ratings_title", "用户评价", "Reviews"),
    ("btn_add", "加入订单", "Add to Order"),
    ("btn_checkout", "去结算", "Checkout"),
    ("total", "合计", "Total"),
    ("rec_title", "为您推荐", "Recommended"),
    ("no_orders", "暂无历史订单", "No past orders"),
    ("cart_empty", "购物车空空如也", "Cart is empty"),
    ("loading", "加载中...", "Loading..."),
    ("submit_success", "订单提交成功！", "Order Placed!"),
    ("submit_fail", "提交失败：", "Failed: "),
    ("chat_title", "点餐助手", "Assistant"),
    ("chat_placeholder", "想吃点什么...", "Ask me anything..."),
    ("lang_btn", "English", "中文"),
    ("user", "用户", "User"),
    ("no_canteens", "暂无食堂", "No canteens found"),
    ("no_stalls", "未找到档口", "No stalls found"),
    ("no_ratings", "暂无评分", "No ratings yet"),
    ("no_recommendations", "暂无推荐", "No recommendations"),
    ("error_loading", "加载错误", "Error loading"),
    ("category", "类别", "Category"),
    ("price", "价格", "Price"),
    ("score", "评分", "Score"),
    ("thinking", "思考中…", "Thinking..."),
    ("error", "错误", "Error"),
    ("submitting", "提交中...", "Submitting..."),
    ("general_stall", "综合档口", "General Stall"),
    ("api_error", "API错误", "API Error"),
    ("no_response", "无响应", "No response"),
    ("tab_today", "今日推荐", "Today"),
    ("tab_week", "本周推荐", "This Week"),
    ("today", "今天", "Today"),
    ("monday", "周一", "Monday"),
    ("tuesday", "周二", "Tuesday"),
    ("wednesday", "周三", "Wednesday"),
    ("thursday", "周四", "Thursday"),
    ("friday", "周五", "Friday"),
    ("saturday", "周六", "Saturday"),
    ("sunday", "周日", "Sunday"),
    ("week_recommendations", "本周推荐菜单", "Weekly Recommendations"),
    ("calories", "热量", "Calories"),
    ("ingredients", "配料", "Ingredients"),
    ("customize_options", "定制选项", "Customize Options"),
    ("login", "登录", "Login"),
    ("register", "注册", "Register"),
    ("logout", "退出登录", "Logout"),
    ("username", "用户名", "Username"),
    ("password", "密码", "Password"),
    ("email", "邮箱", "Email"),
    ("not_logged_in", "未登录", "Not logged in"),
    ("password_hint", "至少6个字符", "At least 6 characters"),
    ("add_rating", "添加评价", "Add Rating"),
    ("rating_score", "评分", "Rating"),
    ("rating_comment", "评论", "Comment"),
    ("submit_rating", "提交评价", "Submit Rating"),
    ("login_success", "登录成功", "Login successful"),
    ("register_success", "注册成功", "Registration successful"),
    ("login_failed", "登录失败", "Login failed"),
    ("register_failed", "注册失败", "Registration failed"),
    ("please_login", "请先登录", "Please login first"),
    ("rating_success", "评价提交成功", "Rating submitted successfully"),
    ("rating_failed", "评价提交失败", "Failed to submit rating"),
    ("pay_now", "立即支付", "Pay Now"),
    ("kcal", "大卡", "kcal"),
    ("no_ingredients", "暂无配料信息", "No ingredients info"),
    ("remove", "删除", "Remove"),
    ("items", "件", "items"),
    ("order_no", "订单号", "Order No."),
    ("status_pending", "待支付", "Pending"),
    ("status_paid", "已支付", "Paid"),
    ("status_cancelled", "已取消", "Cancelled"),
    ("status_unknown", "未知状态", "Unknown"),
    ("pay_success", "支付成功", "Payment successful"),
    ("quantity", "数量", "Quantity"),
    ("required", "必选", "Required"),
    ("no_orders_login", "请登录后查看订单", "Login to view your orders"),
    ("rating_count", "评价数", "Ratings"),
    ("canteen", "食堂", "Canteen"),
    ("you", "我", "You"),
    ("assistant", "助手", "Assistant"),
    ("logout_success", "已退出登录", "Logged out"),
];

pub(super) fn seed(table: &mut LocalizationTable) {
    let simple = [
        (Domain::Dish, DISHES),
        (Domain::Canteen, CANTEENS),
        (Domain::Category, CATEGORIES),
        (Domain::OptionName, OPTION_NAMES),
        (Domain::Ui, UI),
    ];
    for (domain, rows) in simple {
        for (key, zh, en) in rows {
            table.insert(domain, *key, Translation::new(*zh, *en));
        }
    }
    for (option_type, value, zh, en) in OPTION_VALUES {
        table.insert(
            Domain::OptionValue,
            option_value_key(option_type, value),
            Translation::new(*zh, *en),
        );
    }
}
