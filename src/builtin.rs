//! Built-in short-name table for the oneM2M resource model.

use crate::attribute::AttributeCategory::{self, Common, Custom, Universal, Unspecified};

/// (short code, long name, category). Short codes are unique.
pub(crate) static BUILTIN_ATTRIBUTES: &[(&str, &str, AttributeCategory)] = &[
    // Universal attributes
    ("ty", "resourceType", Universal),
    ("ri", "resourceID", Universal),
    ("rn", "resourceName", Universal),
    ("pi", "parentID", Universal),
    ("ct", "creationTime", Universal),
    ("lt", "lastModifiedTime", Universal),
    ("lbl", "labels", Universal),
    // Common attributes
    ("acpi", "accessControlPolicyIDs", Common),
    ("et", "expirationTime", Common),
    ("at", "announceTo", Common),
    ("aa", "announcedAttribute", Common),
    ("ast", "announceSyncType", Common),
    ("st", "stateTag", Common),
    ("cr", "creator", Common),
    ("daci", "dynamicAuthorizationConsultationIDs", Common),
    ("lnk", "link", Common),
    ("loc", "location", Common),
    ("hld", "holder", Common),
    ("cstn", "custodian", Common),
    ("or", "ontologyRef", Common),
    ("esi", "e2eSecInfo", Common),
    // CSEBase / remoteCSE
    ("cst", "cseType", Custom),
    ("csi", "CSE-ID", Custom),
    ("srt", "supportedResourceType", Custom),
    ("poa", "pointOfAccess", Custom),
    ("nl", "nodeLink", Custom),
    ("ncp", "notificationCongestionPolicy", Custom),
    ("srv", "supportedReleaseVersions", Custom),
    ("csz", "contentSerialization", Custom),
    ("cb", "CSEBase", Custom),
    ("dcse", "descendantCSEs", Custom),
    ("mtcc", "m2mTrafficConstraints", Custom),
    // AE
    ("api", "App-ID", Custom),
    ("aei", "AE-ID", Custom),
    ("apn", "appName", Custom),
    ("rr", "requestReachability", Custom),
    ("nu", "notificationURI", Custom),
    ("nct", "notificationContentType", Custom),
    // container / contentInstance
    ("mni", "maxNrOfInstances", Custom),
    ("mbs", "maxByteSize", Custom),
    ("mia", "maxInstanceAge", Custom),
    ("cni", "currentNrOfInstances", Custom),
    ("cbs", "currentByteSize", Custom),
    ("li", "locationID", Custom),
    ("disr", "disableRetrieval", Custom),
    ("cnf", "contentInfo", Custom),
    ("cs", "contentSize", Custom),
    ("con", "content", Custom),
    ("conr", "contentRef", Custom),
    ("dgt", "dataGenerationTime", Custom),
    ("snr", "sequenceNr", Custom),
    // flexContainer
    ("cnd", "containerDefinition", Custom),
    ("nsi", "nodeStateIndicator", Custom),
    // timeSeries
    ("pei", "periodicInterval", Custom),
    ("peid", "periodicIntervalDelta", Custom),
    ("mdd", "missingDataDetect", Custom),
    ("mdn", "missingDataMaxNr", Custom),
    ("mdlt", "missingDataList", Custom),
    ("mdc", "missingDataCurrentNr", Custom),
    ("mdt", "missingDataDetectTimer", Custom),
    // subscription
    ("enc", "eventNotificationCriteria", Custom),
    ("exc", "expirationCounter", Custom),
    ("gpi", "groupID", Custom),
    ("nfu", "notificationForwardingURI", Custom),
    ("bn", "batchNotify", Custom),
    ("rl", "rateLimit", Custom),
    ("psn", "preSubscriptionNotify", Custom),
    ("pn", "pendingNotification", Custom),
    ("nsp", "notificationStoragePriority", Custom),
    ("ln", "latestNotify", Custom),
    ("nec", "notificationEventCat", Custom),
    ("su", "subscriberURI", Custom),
    ("net", "notificationEventType", Custom),
    ("om", "operationMonitor", Custom),
    ("num", "number", Custom),
    ("dur", "duration", Custom),
    // group
    ("mt", "memberType", Custom),
    ("cnm", "currentNrOfMembers", Custom),
    ("mnm", "maxNrOfMembers", Custom),
    ("mid", "memberIDs", Custom),
    ("macp", "membersAccessControlPolicyIDs", Custom),
    ("mtv", "memberTypeValidated", Custom),
    ("csy", "consistencyStrategy", Custom),
    ("gn", "groupName", Custom),
    // accessControlPolicy
    ("pv", "privileges", Custom),
    ("pvs", "selfPrivileges", Custom),
    ("acr", "accessControlRules", Custom),
    ("acor", "accessControlOriginators", Custom),
    ("acop", "accessControlOperations", Custom),
    ("acco", "accessControlContexts", Custom),
    ("actw", "accessControlWindow", Custom),
    ("acip", "accessControlIpAddresses", Custom),
    ("aclr", "accessControlLocationRegion", Custom),
    ("acaf", "accessControlAuthenticationFlag", Custom),
    // node / mgmtObj
    ("ni", "nodeID", Custom),
    ("hcl", "hostedCSELink", Custom),
    ("mgd", "mgmtDefinition", Custom),
    ("obis", "objectIDs", Custom),
    ("obps", "objectPaths", Custom),
    ("dc", "description", Custom),
    ("fwn", "firmwareName", Custom),
    ("swn", "softwareName", Custom),
    ("vr", "version", Custom),
    ("url", "URL", Custom),
    ("ud", "update", Custom),
    ("uds", "updateStatus", Custom),
    ("in", "install", Custom),
    ("un", "uninstall", Custom),
    ("ins", "installStatus", Custom),
    ("act", "activate", Custom),
    ("dea", "deactivate", Custom),
    ("acts", "activeStatus", Custom),
    ("dlb", "deviceLabel", Custom),
    ("man", "manufacturer", Custom),
    ("mod", "model", Custom),
    ("dty", "deviceType", Custom),
    ("fwv", "fwVersion", Custom),
    ("swv", "swVersion", Custom),
    ("hwv", "hwVersion", Custom),
    ("cnty", "country", Custom),
    ("btl", "batteryLevel", Custom),
    ("bts", "batteryStatus", Custom),
    ("mma", "memAvailable", Custom),
    ("mmt", "memTotal", Custom),
    ("rbo", "reboot", Custom),
    ("far", "factoryReset", Custom),
    ("dvd", "devId", Custom),
    ("dvt", "devType", Custom),
    ("att", "attached", Custom),
    ("cas", "capabilityActionStatus", Custom),
    ("cus", "currentState", Custom),
    ("ena", "enable", Custom),
    ("dis", "disable", Custom),
    // locationPolicy
    ("los", "locationSource", Custom),
    ("lou", "locationUpdatePeriod", Custom),
    ("lot", "locationTargetID", Custom),
    ("lor", "locationServer", Custom),
    ("loi", "locationContainerID", Custom),
    ("lon", "locationContainerName", Custom),
    ("lost", "locationStatus", Custom),
    // semanticDescriptor
    ("dcrp", "descriptorRepresentation", Custom),
    ("soe", "semanticOpExec", Custom),
    ("dsp", "descriptor", Custom),
    ("rels", "relatedSemantics", Custom),
    // Resource type names
    ("ae", "AE", Unspecified),
    ("cnt", "container", Unspecified),
    ("cin", "contentInstance", Unspecified),
    ("sub", "subscription", Unspecified),
    ("grp", "group", Unspecified),
    ("acp", "accessControlPolicy", Unspecified),
    ("csr", "remoteCSE", Unspecified),
    ("nod", "node", Unspecified),
    ("fcnt", "flexContainer", Unspecified),
    ("ts", "timeSeries", Unspecified),
    ("tsi", "timeSeriesInstance", Unspecified),
    ("lcp", "locationPolicy", Unspecified),
    ("pch", "pollingChannel", Unspecified),
    ("req", "request", Unspecified),
    ("fwr", "firmware", Unspecified),
    ("swr", "software", Unspecified),
    ("dvi", "deviceInfo", Unspecified),
    ("bat", "battery", Unspecified),
    ("mem", "memory", Unspecified),
    ("dvc", "deviceCapability", Unspecified),
    ("smd", "semanticDescriptor", Unspecified),
    ("uril", "URIList", Unspecified),
    ("rsp", "response", Unspecified),
    ("sgn", "notification", Unspecified),
    ("dbg", "debugInfo", Unspecified),
    // Request and response primitive parameters
    ("op", "operation", Unspecified),
    ("to", "to", Unspecified),
    ("fr", "from", Unspecified),
    ("rqi", "requestIdentifier", Unspecified),
    ("pc", "primitiveContent", Unspecified),
    ("rsc", "responseStatusCode", Unspecified),
    ("rcn", "resultContent", Unspecified),
    ("rt", "responseType", Unspecified),
    ("rset", "resultExpirationTimestamp", Unspecified),
    ("rqet", "requestExpirationTimestamp", Unspecified),
    ("oet", "operationExecutionTimestamp", Unspecified),
    ("rp", "resultPersistence", Unspecified),
    ("drt", "discoveryResultType", Unspecified),
    ("fc", "filterCriteria", Unspecified),
    ("ec", "eventCategory", Unspecified),
    ("gid", "groupRequestIdentifier", Unspecified),
    ("tids", "tokenIDs", Unspecified),
    ("ltids", "localTokenIDs", Unspecified),
    ("rvi", "releaseVersionIndicator", Unspecified),
    ("vsi", "vendorInformation", Unspecified),
    ("ot", "originatingTimestamp", Unspecified),
    ("sqi", "semanticQueryIndicator", Unspecified),
    // filterCriteria members
    ("crb", "createdBefore", Unspecified),
    ("cra", "createdAfter", Unspecified),
    ("ms", "modifiedSince", Unspecified),
    ("us", "unmodifiedSince", Unspecified),
    ("sts", "stateTagSmaller", Unspecified),
    ("stb", "stateTagBigger", Unspecified),
    ("exb", "expireBefore", Unspecified),
    ("exa", "expireAfter", Unspecified),
    ("sza", "sizeAbove", Unspecified),
    ("szb", "sizeBelow", Unspecified),
    ("cty", "contentType", Unspecified),
    ("atr", "attribute", Unspecified),
    ("fu", "filterUsage", Unspecified),
    ("fo", "filterOperation", Unspecified),
    ("lim", "limit", Unspecified),
    ("lvl", "level", Unspecified),
    ("ofst", "offset", Unspecified),
    ("arp", "applyRelativePath", Unspecified),
    // Notification members
    ("nev", "notificationEvent", Unspecified),
    ("rep", "representation", Unspecified),
    ("sud", "subscriptionDeletion", Unspecified),
    ("sur", "subscriptionReference", Unspecified),
    ("vrq", "verificationRequest", Unspecified),
    // Complex type members
    ("nm", "name", Unspecified),
    ("val", "value", Unspecified),
    ("typ", "type", Unspecified),
    ("dgs", "dataGenerationTimestamps", Unspecified),
];
