//! The static operation catalog

use crate::schema::{HttpMethod, Literal, NumberRange, OperationSpec, ParamSpec, Reshape};

/// Upstream endpoint paths, relative to the configured base URL
pub mod endpoints {
    pub const LINKEDIN_SEARCH_USERS: &str = "/api/linkedin/search/users";
    pub const LINKEDIN_USER: &str = "/api/linkedin/user";
    pub const LINKEDIN_EMAIL_USER: &str = "/api/linkedin/email/user";
    pub const LINKEDIN_USER_POSTS: &str = "/api/linkedin/user/posts";
    pub const LINKEDIN_USER_REACTIONS: &str = "/api/linkedin/user/reactions";
    pub const LINKEDIN_USER_COMMENTS: &str = "/api/linkedin/user/comments";
    pub const LINKEDIN_USER_ENDORSERS: &str = "/api/linkedin/user/endorsers";
    pub const LINKEDIN_USER_CERTIFICATES: &str = "/api/linkedin/user/certificates";
    pub const LINKEDIN_USER_EMAIL_DB: &str = "/api/linkedin/user/email";
    pub const LINKEDIN_SEARCH_POSTS: &str = "/api/linkedin/search/posts";
    pub const LINKEDIN_POST_REPOSTS: &str = "/api/linkedin/post/reposts";
    pub const LINKEDIN_POST_COMMENTS: &str = "/api/linkedin/post/comments";
    pub const LINKEDIN_POST_REACTIONS: &str = "/api/linkedin/post/reactions";
    pub const LINKEDIN_GOOGLE_COMPANY: &str = "/api/linkedin/google/company";
    pub const LINKEDIN_COMPANY: &str = "/api/linkedin/company";
    pub const LINKEDIN_COMPANY_EMPLOYEES: &str = "/api/linkedin/company/employees";
    pub const LINKEDIN_COMPANY_POSTS: &str = "/api/linkedin/company/posts";
    pub const LINKEDIN_SN_SEARCH_USERS: &str = "/api/linkedin/sn_search/users";
    pub const LINKEDIN_CHAT_MESSAGES: &str = "/api/linkedin/management/chat/messages";
    pub const LINKEDIN_CHAT_MESSAGE: &str = "/api/linkedin/management/chat/message";
    pub const LINKEDIN_USER_CONNECTION: &str = "/api/linkedin/management/user/connection";
    pub const LINKEDIN_POST_COMMENT: &str = "/api/linkedin/management/post/comment";
    pub const LINKEDIN_POST: &str = "/api/linkedin/management/post";
    pub const LINKEDIN_USER_CONNECTIONS: &str = "/api/linkedin/management/user/connections";
    pub const LINKEDIN_CONVERSATIONS: &str = "/api/linkedin/management/conversations";
    pub const LINKEDIN_MANAGEMENT_ME: &str = "/api/linkedin/management/me";
    pub const GOOGLE_SEARCH: &str = "/api/google/search";
    pub const REDDIT_SEARCH_POSTS: &str = "/api/reddit/search/posts";
    pub const REDDIT_POSTS: &str = "/api/reddit/posts";
    pub const REDDIT_POST_COMMENTS: &str = "/api/reddit/posts/comments";
    pub const INSTAGRAM_USER: &str = "/api/instagram/user";
    pub const INSTAGRAM_USER_POSTS: &str = "/api/instagram/user/posts";
    pub const INSTAGRAM_USER_REELS: &str = "/api/instagram/user/reels";
    pub const INSTAGRAM_USER_FRIENDSHIPS: &str = "/api/instagram/user/friendships";
    pub const INSTAGRAM_POST: &str = "/api/instagram/post";
    pub const INSTAGRAM_POST_COMMENTS: &str = "/api/instagram/post/comments";
    pub const INSTAGRAM_POST_LIKES: &str = "/api/instagram/post/likes";
    pub const INSTAGRAM_SEARCH_POSTS: &str = "/api/instagram/search/posts";
    pub const TWITTER_USER: &str = "/api/twitter/user";
    pub const TWITTER_SEARCH_USERS: &str = "/api/twitter/search/users";
    pub const TWITTER_USER_POSTS: &str = "/api/twitter/user/posts";
    pub const TWITTER_SEARCH_POSTS: &str = "/api/twitter/search/posts";
    pub const TWITTER_POST: &str = "/api/twitter/post";
    pub const WEBPARSER_PARSE: &str = "/api/webparser/parse";
    pub const WEBPARSER_SITEMAP: &str = "/api/webparser/sitemap";
}

const DEFAULT_TIMEOUT: i64 = 300;
const TIMEOUT_RANGE: NumberRange = NumberRange::between(20.0, 1500.0);

/// Scraping timeout, type-checked only.
const TIMEOUT: ParamSpec = ParamSpec::number("timeout")
    .default_int(DEFAULT_TIMEOUT)
    .describe("Timeout in seconds");

/// Scraping timeout restricted to 20..=1500 seconds.
const TIMEOUT_BOUNDED: ParamSpec = ParamSpec::number("timeout")
    .range(TIMEOUT_RANGE)
    .default_int(DEFAULT_TIMEOUT)
    .describe("Timeout in seconds (20-1500)");

const COUNT_POSITIVE: ParamSpec = ParamSpec::number("count")
    .range(NumberRange::POSITIVE)
    .required()
    .describe("Max result count");

const PROFILE_URN: Reshape = Reshape::UserUrn { strict: true };
const PROFILE_URN_LENIENT: Reshape = Reshape::UserUrn { strict: false };
const ACTIVITY: &[&str] = &["activity:"];

const LANGUAGES: &[&str] = &[
    "Arabic", "English", "Spanish", "Portuguese", "Chinese", "French", "Italian", "Russian",
    "German", "Dutch", "Turkish", "Tagalog", "Polish", "Korean", "Japanese", "Malay",
    "Norwegian", "Danish", "Romanian", "Swedish", "Bahasa Indonesia", "Czech",
];

const FUNCTIONS: &[&str] = &[
    "Accounting",
    "Administrative",
    "Arts and Design",
    "Business",
    "Development",
    "Community and Social Services",
    "Consulting",
    "Education",
    "Engineering",
    "Entrepreneurship",
    "Finance",
    "Healthcare Services",
    "Human Resources",
    "Information Technology",
    "Legal",
    "Marketing",
    "Media and Communication",
    "Military and Protective Services",
    "Operations",
    "Product Management",
    "Program and Project Management",
    "Purchasing",
    "Quality Assurance",
    "Research",
    "Real Estate",
    "Sales",
    "Customer Success and Support",
];

const LEVELS: &[&str] = &[
    "Entry",
    "Director",
    "Owner",
    "CXO",
    "Vice President",
    "Experienced Manager",
    "Entry Manager",
    "Strategic",
    "Senior",
    "Trainy",
];

const TENURE: &[&str] = &["0-1", "1-2", "3-5", "6-10", "10+"];

const COMPANY_SIZES: &[&str] = &[
    "Self-employed",
    "1-10",
    "11-50",
    "51-200",
    "201-500",
    "501-1,000",
    "1,001-5,000",
    "5,001-10,000",
    "10,001+",
];

const COMPANY_TYPES: &[&str] = &[
    "Public Company",
    "Privately Held",
    "Non Profit",
    "Educational Institution",
    "Partnership",
    "Self Employed",
    "Self Owned",
    "Government Agency",
];

const PROFILE_FLAGS: &[(&str, Literal)] = &[
    ("with_experience", Literal::Bool(true)),
    ("with_education", Literal::Bool(true)),
    ("with_skills", Literal::Bool(true)),
];

const POST: OperationSpec = OperationSpec {
    name: "",
    description: "",
    path: "",
    method: HttpMethod::Post,
    params: &[],
    fixed: &[],
    any_of: &[],
    management: false,
    error_label: "",
};

static OPERATIONS: &[OperationSpec] = &[
    // LinkedIn: people and profiles
    OperationSpec {
        name: "search_linkedin_users",
        description: "Search for LinkedIn users with various filters like keywords, name, title, company, location etc.",
        path: endpoints::LINKEDIN_SEARCH_USERS,
        params: &[
            ParamSpec::string("keywords").truthy().describe("Any keyword for searching in the user page."),
            ParamSpec::string("first_name").truthy().describe("Exact first name"),
            ParamSpec::string("last_name").truthy().describe("Exact last name"),
            ParamSpec::string("title").truthy().describe("Exact word in the title"),
            ParamSpec::string("company_keywords").truthy().describe("Exact word in the company name"),
            ParamSpec::string("school_keywords").truthy().describe("Exact word in the school name"),
            ParamSpec::string("current_company")
                .truthy()
                .reshape(Reshape::ReferenceList("company"))
                .describe("Company URN (company:*) or name"),
            ParamSpec::string("past_company")
                .truthy()
                .reshape(Reshape::ReferenceList("company"))
                .describe("Past company URN (company:*) or name"),
            ParamSpec::string("location")
                .truthy()
                .reshape(Reshape::ReferenceList("geo"))
                .describe("Location name or URN (geo:*)"),
            ParamSpec::string("industry")
                .truthy()
                .reshape(Reshape::ReferenceList("industry"))
                .describe("Industry URN (industry:*) or name"),
            ParamSpec::string("education")
                .truthy()
                .reshape(Reshape::ReferenceList("fsd_company"))
                .describe("Education URN (fsd_company:*) or name"),
            ParamSpec::number("count").default_int(10).describe("Maximum number of results (max 1000)"),
            TIMEOUT,
        ],
        any_of: &[
            "keywords",
            "first_name",
            "last_name",
            "title",
            "company_keywords",
            "school_keywords",
            "current_company",
            "past_company",
            "location",
            "industry",
            "education",
        ],
        error_label: "LinkedIn search",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_profile",
        description: "Get detailed information about a LinkedIn user profile",
        path: endpoints::LINKEDIN_USER,
        params: &[
            ParamSpec::string("user").required().describe("User alias, URL, or URN"),
            ParamSpec::boolean("with_experience").default_bool(true).describe("Include experience info"),
            ParamSpec::boolean("with_education").default_bool(true).describe("Include education info"),
            ParamSpec::boolean("with_skills").default_bool(true).describe("Include skills info"),
        ],
        fixed: &[("timeout", Literal::Int(DEFAULT_TIMEOUT))],
        error_label: "LinkedIn",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_email_user",
        description: "Get LinkedIn user details by email",
        path: endpoints::LINKEDIN_EMAIL_USER,
        params: &[
            ParamSpec::string("email").required().describe("Email address"),
            ParamSpec::number("count").default_int(5).describe("Max results"),
            TIMEOUT,
        ],
        error_label: "LinkedIn email",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_user_posts",
        description: "Get LinkedIn posts for a user by URN (must include prefix, example: fsd_profile:ACoAAEWn01QBWENVMWqyM3BHfa1A-xsvxjdaXsY)",
        path: endpoints::LINKEDIN_USER_POSTS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .reshape(PROFILE_URN)
                .describe("User URN (must include prefix, example: fsd_profile:ACoAA...)"),
            ParamSpec::number("count").default_int(10).describe("Max posts"),
            TIMEOUT,
        ],
        error_label: "LinkedIn user posts",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_user_reactions",
        description: "Get LinkedIn reactions for a user by URN (must include prefix, example: fsd_profile:ACoAA...)",
        path: endpoints::LINKEDIN_USER_REACTIONS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .reshape(PROFILE_URN)
                .describe("User URN (must include prefix, example: fsd_profile:ACoAA...)"),
            ParamSpec::number("count").default_int(10).describe("Max reactions"),
            TIMEOUT,
        ],
        error_label: "LinkedIn user reactions",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_user_comments",
        description: "Get LinkedIn comments for a user by URN (must include prefix, example: fsd_profile:ACoAA...)",
        path: endpoints::LINKEDIN_USER_COMMENTS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .reshape(PROFILE_URN)
                .describe("User URN (must include prefix, example: fsd_profile:ACoAA...)"),
            ParamSpec::number("count").default_int(10).describe("Max comments"),
            TIMEOUT,
            ParamSpec::number("commented_after")
                .describe("Filter comments that created after the specified date. Accepts timestamp"),
        ],
        error_label: "LinkedIn user comments",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_user_endorsers",
        description: "Get LinkedIn user endorsers by URN",
        path: endpoints::LINKEDIN_USER_ENDORSERS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .reshape(PROFILE_URN_LENIENT)
                .describe("User URN (with fsd_profile: prefix)"),
            ParamSpec::number("count").default_int(10).describe("Max endorsers to return"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "LinkedIn user endorsers",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_user_certificates",
        description: "Get LinkedIn user certificates by URN",
        path: endpoints::LINKEDIN_USER_CERTIFICATES,
        params: &[
            ParamSpec::string("urn")
                .required()
                .reshape(PROFILE_URN_LENIENT)
                .describe("User URN (with fsd_profile: prefix)"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "LinkedIn user certificates",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_user_email_db",
        description: "Get LinkedIn user email from internal database by internal_id, profile URL, alias, or set of them (max 10)",
        path: endpoints::LINKEDIN_USER_EMAIL_DB,
        params: &[
            ParamSpec::string("profile")
                .required()
                .describe("LinkedIn internal_id, profile URL, alias, or set of them (max 10)"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "LinkedIn user email DB",
        ..POST
    },
    OperationSpec {
        name: "linkedin_sn_search_users",
        description: "Advanced search for LinkedIn users using Sales Navigator filters",
        path: endpoints::LINKEDIN_SN_SEARCH_USERS,
        params: &[
            ParamSpec::number("count")
                .range(NumberRange::positive_up_to(2500.0))
                .required()
                .describe("Maximum number of results (max 2500)"),
            TIMEOUT_BOUNDED,
            ParamSpec::string("keywords")
                .truthy()
                .describe("Any keyword for searching in the user profile. Using this may reduce result count."),
            ParamSpec::string_array("first_names").truthy().describe("Exact first names to search for"),
            ParamSpec::string_array("last_names").truthy().describe("Exact last names to search for"),
            ParamSpec::string_array("current_titles").truthy().describe("Exact words to search in current titles"),
            ParamSpec::string_or_array("location")
                .truthy()
                .reshape(Reshape::ReferenceList("geo"))
                .describe("Location URN (geo:*) or name, or array of them"),
            ParamSpec::string_or_array("education")
                .truthy()
                .reshape(Reshape::ReferenceList("company"))
                .describe("Education URN (company:*) or name, or array of them"),
            ParamSpec::string_array_of("languages", LANGUAGES).truthy().describe("Profile languages"),
            ParamSpec::string_array("past_titles").truthy().describe("Exact words to search in past titles"),
            ParamSpec::string_array_of("functions", FUNCTIONS).truthy().describe("Job functions"),
            ParamSpec::string_array_of("levels", LEVELS).truthy().describe("Job seniority levels"),
            ParamSpec::string_array_of("years_in_the_current_company", TENURE)
                .truthy()
                .describe("Years in current company ranges"),
            ParamSpec::string_array_of("years_in_the_current_position", TENURE)
                .truthy()
                .describe("Years in current position ranges"),
            ParamSpec::string_array_of("company_sizes", COMPANY_SIZES).truthy().describe("Company size ranges"),
            ParamSpec::string_array_of("company_types", COMPANY_TYPES).truthy().describe("Company types"),
            ParamSpec::string_or_array("company_locations")
                .truthy()
                .reshape(Reshape::ReferenceList("geo"))
                .describe("Company location URN (geo:*) or name, or array of them"),
            ParamSpec::string_or_array("current_companies")
                .truthy()
                .reshape(Reshape::ReferenceList("company"))
                .describe("Current company URN (company:*) or name, or array of them"),
            ParamSpec::string_or_array("past_companies")
                .truthy()
                .reshape(Reshape::ReferenceList("company"))
                .describe("Past company URN (company:*) or name, or array of them"),
            ParamSpec::string_or_array("industry")
                .truthy()
                .reshape(Reshape::ReferenceList("industry"))
                .describe("Industry URN (industry:*) or name, or array of them"),
        ],
        error_label: "LinkedIn Sales Navigator search",
        ..POST
    },
    // LinkedIn: posts and companies
    OperationSpec {
        name: "search_linkedin_posts",
        description: "Search for LinkedIn posts with various filters like keywords, content type, authors, etc.",
        path: endpoints::LINKEDIN_SEARCH_POSTS,
        params: &[
            COUNT_POSITIVE,
            TIMEOUT_BOUNDED,
            ParamSpec::string("keywords")
                .truthy()
                .describe("Any keyword for searching in the post. For exact search put desired keywords into brackets"),
            ParamSpec::one_of("sort", &["relevance"]).default_str("relevance").describe("Sort type"),
            ParamSpec::one_of("date_posted", &["past-month", "past-week", "past-24h"])
                .default_str("past-month")
                .describe("Date posted"),
            ParamSpec::one_of("content_type", &["videos", "photos", "jobs", "live_videos", "documents"])
                .nullable()
                .truthy()
                .describe("Desired content type"),
            ParamSpec::string_array("mentioned").nullable().truthy().describe("Mentioned users URN in posts"),
            ParamSpec::string_array("authors").nullable().truthy().describe("Authors URN of posts"),
            ParamSpec::string_or_array("author_industries")
                .nullable()
                .truthy()
                .describe("Industry URN, can be obtained in /linkedin/search/industries. Or industry name."),
            ParamSpec::string("author_title").nullable().truthy().describe("Author job title."),
        ],
        error_label: "LinkedIn search posts",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_post_reposts",
        description: "Get LinkedIn reposts for a post by URN",
        path: endpoints::LINKEDIN_POST_REPOSTS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .containing(ACTIVITY)
                .describe("Post URN, only activity urn type is allowed (example: activity:7234173400267538433)"),
            ParamSpec::number("count").default_int(10).describe("Max reposts to return"),
            TIMEOUT,
        ],
        error_label: "LinkedIn post reposts",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_post_comments",
        description: "Get LinkedIn comments for a post by URN",
        path: endpoints::LINKEDIN_POST_COMMENTS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .containing(ACTIVITY)
                .describe("Post URN, only activity urn type is allowed (example: activity:7234173400267538433)"),
            ParamSpec::one_of("sort", &["relevance", "recent"])
                .default_str("relevance")
                .describe("Sort type (relevance or recent)"),
            ParamSpec::number("count").default_int(10).describe("Max comments to return"),
            TIMEOUT,
        ],
        error_label: "LinkedIn post comments",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_post_reactions",
        description: "Get LinkedIn reactions for a post by URN",
        path: endpoints::LINKEDIN_POST_REACTIONS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .containing(ACTIVITY)
                .describe("Post URN, only activity urn type is allowed (example: activity:7234173400267538433)"),
            ParamSpec::number("count").default_int(50).describe("Max reactions to return"),
            TIMEOUT,
        ],
        error_label: "LinkedIn post reactions",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_google_company",
        description: "Search for LinkedIn companies using Google search. First result is usually the best match.",
        path: endpoints::LINKEDIN_GOOGLE_COMPANY,
        params: &[
            ParamSpec::string_array("keywords")
                .required()
                .non_empty()
                .describe("Company keywords for search. For example, company name or company website"),
            ParamSpec::boolean("with_urn")
                .default_bool(false)
                .describe("Include URNs in response (increases execution time)"),
            ParamSpec::number("count_per_keyword")
                .range(NumberRange::between(1.0, 10.0))
                .default_int(1)
                .describe("Max results per keyword"),
            TIMEOUT,
        ],
        error_label: "LinkedIn Google company search",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_company",
        description: "Get detailed information about a LinkedIn company",
        path: endpoints::LINKEDIN_COMPANY,
        params: &[
            ParamSpec::string("company")
                .required()
                .describe("Company Alias or URL or URN (example: 'openai' or 'company:1441')"),
            TIMEOUT,
        ],
        error_label: "LinkedIn company",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_company_employees",
        description: "Get employees of a LinkedIn company",
        path: endpoints::LINKEDIN_COMPANY_EMPLOYEES,
        params: &[
            ParamSpec::string_array("companies")
                .required()
                .non_empty()
                .describe("Company URNs (example: ['company:14064608'])"),
            ParamSpec::string("keywords").describe("Any keyword for searching employees"),
            ParamSpec::string("first_name").describe("Search for exact first name"),
            ParamSpec::string("last_name").describe("Search for exact last name"),
            ParamSpec::number("count").default_int(10).describe("Maximum number of results"),
            TIMEOUT,
        ],
        error_label: "LinkedIn company employees",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_company_posts",
        description: "Get LinkedIn posts for a company by URN",
        path: endpoints::LINKEDIN_COMPANY_POSTS,
        params: &[
            ParamSpec::string("urn")
                .required()
                .containing(&["company:"])
                .describe("Company URN (example: company:11130470)"),
            ParamSpec::number("count").default_int(10).describe("Max posts to return"),
            TIMEOUT,
        ],
        error_label: "LinkedIn company posts",
        ..POST
    },
    // LinkedIn: management (acts as the configured account)
    OperationSpec {
        name: "get_linkedin_chat_messages",
        description: "Get top chat messages from LinkedIn management API. Account ID is taken from environment.",
        path: endpoints::LINKEDIN_CHAT_MESSAGES,
        params: &[
            ParamSpec::string("user")
                .required()
                .reshape(PROFILE_URN)
                .describe("User URN for filtering messages (must include prefix, e.g. fsd_profile:ACoAA...)"),
            ParamSpec::string("company")
                .truthy()
                .describe("Company URN where the account is admin (format: company:123456)"),
            ParamSpec::number("count").default_int(20).describe("Max messages to return"),
            TIMEOUT,
        ],
        management: true,
        error_label: "LinkedIn chat messages",
        ..POST
    },
    OperationSpec {
        name: "send_linkedin_chat_message",
        description: "Send a chat message via LinkedIn management API. Account ID is taken from environment.",
        path: endpoints::LINKEDIN_CHAT_MESSAGE,
        params: &[
            ParamSpec::string("user")
                .required()
                .reshape(PROFILE_URN)
                .describe("Recipient user URN (must include prefix, e.g. fsd_profile:ACoAA...)"),
            ParamSpec::string("company")
                .truthy()
                .describe("Company URN where the account is admin (format: company:123456)"),
            ParamSpec::string("text").required().describe("Message text"),
            TIMEOUT,
        ],
        management: true,
        error_label: "LinkedIn send chat message",
        ..POST
    },
    OperationSpec {
        name: "send_linkedin_connection",
        description: "Send a connection invitation to LinkedIn user. Account ID is taken from environment.",
        path: endpoints::LINKEDIN_USER_CONNECTION,
        params: &[
            ParamSpec::string("user")
                .required()
                .reshape(PROFILE_URN)
                .describe("Recipient user URN (must include prefix, e.g. fsd_profile:ACoAA...)"),
            TIMEOUT,
        ],
        management: true,
        error_label: "LinkedIn connection request",
        ..POST
    },
    OperationSpec {
        name: "send_linkedin_post_comment",
        description: "Create a comment on a LinkedIn post or on another comment. Account ID is taken from environment.",
        path: endpoints::LINKEDIN_POST_COMMENT,
        params: &[
            ParamSpec::string("text").required().describe("Comment text"),
            ParamSpec::string("urn")
                .required()
                .containing(&["activity:", "comment:"])
                .reshape(Reshape::Reference(&["activity", "comment"]))
                .describe("URN of the activity or comment to comment on (e.g., 'activity:123' or 'comment:(activity:123,456)')"),
            TIMEOUT,
        ],
        management: true,
        error_label: "LinkedIn comment",
        ..POST
    },
    OperationSpec {
        name: "send_linkedin_post",
        description: "Create a post on LinkedIn. Account ID is taken from environment.",
        path: endpoints::LINKEDIN_POST,
        params: &[
            ParamSpec::string("text").required().describe("Post text content"),
            ParamSpec::one_of("visibility", &["ANYONE", "CONNECTIONS_ONLY"])
                .default_str("ANYONE")
                .describe("Post visibility"),
            ParamSpec::one_of("comment_scope", &["ALL", "CONNECTIONS_ONLY", "NONE"])
                .default_str("ALL")
                .describe("Who can comment on the post"),
            TIMEOUT,
        ],
        management: true,
        error_label: "LinkedIn post creation",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_user_connections",
        description: "Get list of LinkedIn user connections. Account ID is taken from environment.",
        path: endpoints::LINKEDIN_USER_CONNECTIONS,
        params: &[
            ParamSpec::number("connected_after")
                .describe("Filter users that added after the specified date (timestamp)"),
            ParamSpec::number("count").default_int(20).describe("Max connections to return"),
            TIMEOUT,
        ],
        management: true,
        error_label: "LinkedIn user connections",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_conversations",
        description: "Get list of LinkedIn conversations from the messaging interface. Account ID is taken from environment.",
        path: endpoints::LINKEDIN_CONVERSATIONS,
        params: &[
            ParamSpec::string("company")
                .truthy()
                .describe("Company URN where the account is admin (format: company:123456)"),
            ParamSpec::number("connected_after")
                .describe("Filter conversations created after the specified date (timestamp)"),
            ParamSpec::number("count").default_int(20).describe("Max conversations to return"),
            TIMEOUT,
        ],
        management: true,
        error_label: "LinkedIn conversations",
        ..POST
    },
    OperationSpec {
        name: "get_linkedin_management_me",
        description: "Get own LinkedIn profile information (requires ACCOUNT_ID)",
        path: endpoints::LINKEDIN_MANAGEMENT_ME,
        params: &[TIMEOUT_BOUNDED],
        management: true,
        error_label: "LinkedIn management me",
        ..POST
    },
    // Google
    OperationSpec {
        name: "google_search",
        description: "Search for information using Google search API",
        path: endpoints::GOOGLE_SEARCH,
        params: &[
            ParamSpec::string("query")
                .required()
                .describe("Search query. For example: 'python fastapi'"),
            ParamSpec::number("count")
                .default_int(10)
                .reshape(Reshape::Clamp { min: 1, max: 20 })
                .describe("Maximum number of results (from 1 to 20)"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Google search",
        ..POST
    },
    // Reddit
    OperationSpec {
        name: "search_reddit_posts",
        description: "Search for Reddit posts with various filters",
        path: endpoints::REDDIT_SEARCH_POSTS,
        params: &[
            ParamSpec::string("query").required().describe("Main search query"),
            ParamSpec::one_of("sort", &["relevance", "hot", "top", "new", "comments"])
                .default_str("relevance")
                .describe("Type of search results sorting"),
            ParamSpec::one_of("time_filter", &["all", "year", "month", "week", "day", "hour"])
                .default_str("all")
                .describe("Time filter for search results"),
            COUNT_POSITIVE,
            TIMEOUT_BOUNDED,
        ],
        error_label: "Reddit search posts",
        ..POST
    },
    OperationSpec {
        name: "get_reddit_posts",
        description: "Get detailed information about Reddit posts by post URL",
        path: endpoints::REDDIT_POSTS,
        params: &[
            ParamSpec::string("post_url")
                .required()
                .describe("Reddit post URL (e.g., '/r/DogAdvice/comments/1o2g2pq/i_think_i_need_to_rehome_my_dog/')"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Reddit posts",
        ..POST
    },
    OperationSpec {
        name: "get_reddit_post_comments",
        description: "Get comments for a Reddit post by post URL",
        path: endpoints::REDDIT_POST_COMMENTS,
        params: &[
            ParamSpec::string("post_url")
                .required()
                .describe("Reddit post URL (e.g., '/r/DogAdvice/comments/1o2g2pq/i_think_i_need_to_rehome_my_dog/')"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Reddit post comments",
        ..POST
    },
    // Instagram
    OperationSpec {
        name: "get_instagram_user",
        description: "Get Instagram user information by URL, alias or ID",
        path: endpoints::INSTAGRAM_USER,
        params: &[
            ParamSpec::string("user").required().describe("User ID, alias or URL"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram user",
        ..POST
    },
    OperationSpec {
        name: "get_instagram_user_posts",
        description: "Get Instagram user posts",
        path: endpoints::INSTAGRAM_USER_POSTS,
        params: &[
            ParamSpec::string("user").required().describe("User ID, alias or URL"),
            COUNT_POSITIVE,
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram user posts",
        ..POST
    },
    OperationSpec {
        name: "get_instagram_user_reels",
        description: "Get reels from an Instagram user profile",
        path: endpoints::INSTAGRAM_USER_REELS,
        params: &[
            ParamSpec::string("user").required().describe("User ID, alias or URL"),
            COUNT_POSITIVE.describe("Max reels to return"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram user reels",
        ..POST
    },
    OperationSpec {
        name: "get_instagram_user_friendships",
        description: "Get followers or following list from Instagram user",
        path: endpoints::INSTAGRAM_USER_FRIENDSHIPS,
        params: &[
            ParamSpec::string("user").required().describe("User ID, alias or URL"),
            COUNT_POSITIVE.describe("Max results to return"),
            ParamSpec::one_of("type", &["followers", "following"])
                .required()
                .describe("Type of relationships to fetch"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram user friendships",
        ..POST
    },
    OperationSpec {
        name: "get_instagram_post",
        description: "Get Instagram post by ID",
        path: endpoints::INSTAGRAM_POST,
        params: &[
            ParamSpec::string("post").required().describe("Post ID"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram post",
        ..POST
    },
    OperationSpec {
        name: "get_instagram_post_comments",
        description: "Get Instagram post comments",
        path: endpoints::INSTAGRAM_POST_COMMENTS,
        params: &[
            ParamSpec::string("post").required().describe("Post ID"),
            COUNT_POSITIVE,
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram post comments",
        ..POST
    },
    OperationSpec {
        name: "get_instagram_post_likes",
        description: "Get likes from an Instagram post",
        path: endpoints::INSTAGRAM_POST_LIKES,
        params: &[
            ParamSpec::string("post").required().describe("Post ID"),
            COUNT_POSITIVE.describe("Max likes to return"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram post likes",
        ..POST
    },
    OperationSpec {
        name: "search_instagram_posts",
        description: "Search Instagram posts by query",
        path: endpoints::INSTAGRAM_SEARCH_POSTS,
        params: &[
            ParamSpec::string("query").required().describe("Search query"),
            COUNT_POSITIVE.describe("Max results to return"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Instagram search posts",
        ..POST
    },
    // Twitter/X
    OperationSpec {
        name: "get_twitter_user",
        description: "Get Twitter/X user profile information",
        path: endpoints::TWITTER_USER,
        params: &[
            ParamSpec::string("user").required().describe("User Alias or URL"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Twitter user",
        ..POST
    },
    OperationSpec {
        name: "search_twitter_users",
        description: "Search Twitter/X users",
        path: endpoints::TWITTER_SEARCH_USERS,
        params: &[
            COUNT_POSITIVE.describe("Max results to return"),
            ParamSpec::string("query").truthy().describe("Main search users query"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Twitter search users",
        ..POST
    },
    OperationSpec {
        name: "get_twitter_user_posts",
        description: "Get posts from a Twitter/X user",
        path: endpoints::TWITTER_USER_POSTS,
        params: &[
            ParamSpec::string("user").required().describe("User ID, alias or URL"),
            COUNT_POSITIVE.describe("Max posts to return"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Twitter user posts",
        ..POST
    },
    OperationSpec {
        name: "search_twitter_posts",
        description: "Search Twitter/X posts with advanced filtering",
        path: endpoints::TWITTER_SEARCH_POSTS,
        params: &[
            COUNT_POSITIVE.describe("Max results to return"),
            ParamSpec::string("query").describe("Main search query"),
            ParamSpec::string("exact_phrase").describe("Exact phrase (in quotes)"),
            ParamSpec::string("any_of_these_words").describe("Any of these words (OR condition)"),
            ParamSpec::string("none_of_these_words").describe("None of these words (NOT condition)"),
            ParamSpec::string("these_hashtags").describe("These hashtags"),
            ParamSpec::string("language").describe("Language of tweets"),
            ParamSpec::string("from_these_accounts").describe("From these accounts"),
            ParamSpec::string("to_these_accounts").describe("To these accounts"),
            ParamSpec::string("mentioning_these_accounts")
                .describe("Mentioning these accounts (username with @)"),
            ParamSpec::string("min_replies").describe("Minimum number of replies"),
            ParamSpec::string("min_likes").describe("Minimum number of likes"),
            ParamSpec::string("min_retweets").describe("Minimum number of retweets"),
            ParamSpec::string("from_date").describe("Starting date for tweets search (timestamp)"),
            ParamSpec::string("to_date").describe("Ending date for tweets search (timestamp)"),
            ParamSpec::one_of("search_type", &["Top", "Latest", "People", "Photos", "Videos"])
                .default_str("Top")
                .describe("Type of search results"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Twitter search posts",
        ..POST
    },
    OperationSpec {
        name: "get_twitter_post",
        description: "Get Twitter/X post details",
        path: endpoints::TWITTER_POST,
        params: &[
            ParamSpec::string("post_url").required().describe("Twitter post URL"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Twitter post",
        ..POST
    },
    // Web parser
    OperationSpec {
        name: "parse_webpage",
        description: "Parse and extract content from any webpage with flexible filtering options",
        path: endpoints::WEBPARSER_PARSE,
        params: &[
            ParamSpec::string("url").required().describe("URL of the page to parse"),
            ParamSpec::string_array("include_tags").describe("CSS selectors of elements to include"),
            ParamSpec::string_array("exclude_tags")
                .describe("CSS selectors or wildcard masks of elements to exclude"),
            ParamSpec::boolean("only_main_content")
                .default_bool(false)
                .describe("Extract only main content of the page"),
            ParamSpec::boolean("remove_comments").default_bool(true).describe("Remove HTML comments"),
            ParamSpec::boolean("resolve_srcset").default_bool(true).describe("Convert image srcset to src"),
            ParamSpec::boolean("return_full_html")
                .default_bool(false)
                .describe("Return full HTML document or only body content"),
            ParamSpec::number("min_text_block")
                .default_int(200)
                .describe("Minimum text block size for main content detection"),
            ParamSpec::boolean("remove_base64_images")
                .default_bool(true)
                .describe("Remove base64-encoded images"),
            ParamSpec::boolean("strip_all_tags")
                .default_bool(false)
                .describe("Remove all HTML tags and return plain text only"),
            ParamSpec::boolean("extract_contacts")
                .default_bool(false)
                .describe("Extract links, emails, and phone numbers"),
            ParamSpec::boolean("same_origin_links")
                .default_bool(false)
                .describe("Only extract links from the same domain"),
            ParamSpec::boolean("social_links_only")
                .default_bool(false)
                .describe("Only extract social media links"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Web parser",
        ..POST
    },
    OperationSpec {
        name: "get_sitemap",
        description: "Fetch URLs from website sitemap",
        path: endpoints::WEBPARSER_SITEMAP,
        params: &[
            ParamSpec::string("url").required().describe("Website URL to fetch sitemap from"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Sitemap",
        ..POST
    },
    // Deep research aliases
    OperationSpec {
        name: "search",
        description: "Search tool optimized for ChatGPT Deep Research mode",
        path: endpoints::LINKEDIN_SEARCH_USERS,
        params: &[
            ParamSpec::string("query").required().describe("Search query"),
            ParamSpec::number("count").default_int(10).describe("Max results to return"),
            TIMEOUT_BOUNDED,
        ],
        error_label: "Search",
        ..POST
    },
    OperationSpec {
        name: "fetch",
        description: "Fetch tool optimized for ChatGPT Deep Research mode - retrieves complete LinkedIn profile information",
        path: endpoints::LINKEDIN_USER,
        params: &[
            ParamSpec::string("id")
                .required()
                .wire("user")
                .describe("LinkedIn profile URL or username to fetch"),
            TIMEOUT_BOUNDED,
        ],
        fixed: PROFILE_FLAGS,
        error_label: "Fetch",
        ..POST
    },
];

/// Every operation, in catalog order.
pub fn operations() -> &'static [OperationSpec] {
    OPERATIONS
}

pub fn find_operation(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.iter().find(|op| op.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_complete_and_unique() {
        assert_eq!(operations().len(), 47);
        let names: HashSet<_> = operations().iter().map(|op| op.name).collect();
        assert_eq!(names.len(), operations().len());
    }

    #[test]
    fn every_operation_is_well_formed() {
        for op in operations() {
            assert!(op.path.starts_with("/api/"), "{}", op.name);
            assert!(!op.description.is_empty(), "{}", op.name);
            assert!(!op.error_label.is_empty(), "{}", op.name);
            assert_eq!(op.method, HttpMethod::Post);

            let params: HashSet<_> = op.params.iter().map(|p| p.name).collect();
            assert_eq!(params.len(), op.params.len(), "duplicate param in {}", op.name);
            for field in op.any_of {
                assert!(params.contains(field), "{} any_of {}", op.name, field);
            }
        }
    }

    #[test]
    fn management_operations_live_under_management_path() {
        for op in operations() {
            assert_eq!(
                op.management,
                op.path.starts_with("/api/linkedin/management/"),
                "{}",
                op.name
            );
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(
            find_operation("google_search").map(|op| op.path),
            Some(endpoints::GOOGLE_SEARCH)
        );
        assert!(find_operation("does_not_exist").is_none());
    }

    #[test]
    fn deep_research_aliases_reuse_linkedin_endpoints() {
        assert_eq!(find_operation("search").unwrap().path, endpoints::LINKEDIN_SEARCH_USERS);
        assert_eq!(find_operation("fetch").unwrap().path, endpoints::LINKEDIN_USER);
    }
}
